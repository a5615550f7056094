// ============================================================================
// ADMIN DASHBOARD - Painel do administrador
// ============================================================================
// Renderizado sem header/footer; enquanto houver sessão admin, é a única view.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::animal::count_by_species;
use crate::models::{Species, ANIMALS, PLANS};
use crate::services::payment_service::format_amount;
use crate::state::{AppState, ShellEvent};
use crate::views::widgets::action_button;

/// Renderizar dashboard admin
pub fn render_admin_dashboard(state: &AppState) -> Result<Element, JsValue> {
    log::debug!("👑 [ADMIN] render_admin_dashboard()");

    let container = ElementBuilder::new("div")?.class("admin-container").build();

    append_child(&container, &create_admin_header(state)?)?;
    append_child(&container, &create_summary_cards()?)?;
    append_child(&container, &create_plans_table()?)?;

    Ok(container)
}

fn create_admin_header(state: &AppState) -> Result<Element, JsValue> {
    let name = state
        .user()
        .map(|user| user.name)
        .unwrap_or_else(|| "Administrador".to_string());

    let logout = {
        let s = state.clone();
        action_button("Sair", "btn btn-outline", move || {
            log::info!("🚪 [ADMIN] Logout");
            s.dispatch(ShellEvent::Logout)
        })?
    };

    ElementBuilder::new("header")?
        .class("admin-header")
        .child(
            ElementBuilder::new("div")?
                .child(ElementBuilder::new("h1")?.text("🐾 Painel AJUDATODOS").build())?
                .child(
                    ElementBuilder::new("p")?
                        .class("muted")
                        .text(&format!("Bem-vindo, {}!", name))
                        .build(),
                )?
                .build(),
        )?
        .child(logout)
        .map(ElementBuilder::build)
}

fn stat_card(label: &str, value: &str, icon: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("card stat-card")
        .child(ElementBuilder::new("span")?.class("stat-icon").text(icon).build())?
        .child(ElementBuilder::new("strong")?.class("stat-value").text(value).build())?
        .child(ElementBuilder::new("span")?.class("stat-label").text(label).build())
        .map(ElementBuilder::build)
}

fn create_summary_cards() -> Result<Element, JsValue> {
    ElementBuilder::new("section")?
        .class("grid grid-4 admin-stats")
        .child(stat_card("Planos de doação", &PLANS.len().to_string(), "💝")?)?
        .child(stat_card("Animais para adoção", &ANIMALS.len().to_string(), "🏠")?)?
        .child(stat_card(
            "Cães disponíveis",
            &count_by_species(Species::Dog).to_string(),
            Species::Dog.icon(),
        )?)?
        .child(stat_card(
            "Gatos disponíveis",
            &count_by_species(Species::Cat).to_string(),
            Species::Cat.icon(),
        )?)
        .map(ElementBuilder::build)
}

fn create_plans_table() -> Result<Element, JsValue> {
    let head = ElementBuilder::new("tr")?
        .children(
            ["Plano", "Valor mensal", "Benefícios", "Destaque"]
                .into_iter()
                .map(|h| ElementBuilder::new("th").map(|b| b.text(h).build()))
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    let body = ElementBuilder::new("tbody")?.build();
    for plan in PLANS.iter() {
        let cells = [
            plan.name.to_string(),
            format!("R$ {}", format_amount(plan.price)),
            plan.benefits.len().to_string(),
            if plan.highlight { "⭐".to_string() } else { "-".to_string() },
        ];
        let row = ElementBuilder::new("tr")?
            .children(
                cells
                    .iter()
                    .map(|c| ElementBuilder::new("td").map(|b| b.text(c).build()))
                    .collect::<Result<Vec<_>, _>>()?,
            )?
            .build();
        append_child(&body, &row)?;
    }

    let table = ElementBuilder::new("table")?
        .class("admin-table")
        .child(ElementBuilder::new("thead")?.child(head)?.build())?
        .child(body)?
        .build();

    ElementBuilder::new("section")?
        .class("card")
        .child(ElementBuilder::new("h2")?.class("card-title").text("Planos de doação").build())?
        .child(table)
        .map(ElementBuilder::build)
}
