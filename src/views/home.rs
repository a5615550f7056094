use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::animal::{count_by_species, Species};
use crate::models::{Page, PLANS};
use crate::state::{AppState, ShellEvent};
use crate::views::widgets::{action_button, card, section_title};

/// Página inicial: chamada principal e atalhos
pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page page-home").build();

    let ctas = ElementBuilder::new("div")?.class("hero-actions").build();
    {
        let s = state.clone();
        append_child(&ctas, &action_button("Quero Adotar", "btn btn-primary", move || {
            s.dispatch(ShellEvent::Navigate(Page::Adoption))
        })?)?;
        let s = state.clone();
        append_child(&ctas, &action_button("Como Ajudar", "btn btn-outline", move || {
            s.dispatch(ShellEvent::Navigate(Page::Help))
        })?)?;
        let s = state.clone();
        append_child(&ctas, &action_button("🚨 Denunciar Abandono", "btn btn-danger", move || {
            s.dispatch(ShellEvent::OpenReportDialog)
        })?)?;
    }

    let hero = ElementBuilder::new("section")?
        .class("hero")
        .child(ElementBuilder::new("h1")?.text("Cada animal merece um lar").build())?
        .child(
            ElementBuilder::new("p")?
                .class("hero-subtitle")
                .text("Resgatamos, tratamos e encontramos famílias para cães e gatos abandonados. Você pode fazer parte dessa história.")
                .build(),
        )?
        .child(ctas)?
        .build();
    append_child(&page, &hero)?;

    let highlights = ElementBuilder::new("section")?
        .class("grid grid-3")
        .child(card(
            &format!("{} cães e {} gatos", count_by_species(Species::Dog), count_by_species(Species::Cat)),
            "esperando por uma adoção responsável.",
        )?)?
        .child(card(
            &format!("{} planos de doação", PLANS.len()),
            "para manter alimentação, vacinas e tratamentos em dia.",
        )?)?
        .child(card(
            "Denúncias",
            "Viu um animal abandonado ou em situação de maus-tratos? Avise a gente.",
        )?)?
        .build();

    let section = ElementBuilder::new("section")?
        .class("section")
        .child(section_title("Nosso trabalho", "Transparência e cuidado em cada resgate")?)?
        .child(highlights)?
        .build();
    append_child(&page, &section)?;

    Ok(page)
}
