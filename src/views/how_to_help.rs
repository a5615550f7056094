// ============================================================================
// COMO AJUDAR - Formas de ajudar, planos mensais e diálogo PIX
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::{DonationPlan, HelpAction, Page, ToastMessage, HELP_WAYS, PLANS};
use crate::services::clipboard_service;
use crate::services::payment_service::format_amount;
use crate::state::{AppState, ShellEvent};
use crate::viewmodels::DonationViewModel;
use crate::views::context::ViewContext;
use crate::views::widgets::{action_button, modal, readonly_field, section_title};

pub fn render_how_to_help(state: &AppState, ctx: &ViewContext) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page page-help").build();

    append_child(&page, &render_help_ways(state, &ctx.donation)?)?;
    append_child(&page, &render_plans(&ctx.donation)?)?;

    if ctx.donation.borrow().is_dialog_open() {
        append_child(&page, &render_pix_dialog(state, &ctx.donation)?)?;
    }

    Ok(page)
}

fn choose(donation: &Rc<RefCell<DonationViewModel>>, plan: &'static DonationPlan) {
    donation.borrow_mut().choose_plan(plan);
    crate::schedule_render();
}

fn render_help_ways(state: &AppState, donation: &Rc<RefCell<DonationViewModel>>) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("grid grid-3").build();

    for way in HELP_WAYS.iter() {
        let button = match way.action {
            HelpAction::GoToAdoption => {
                let s = state.clone();
                action_button(way.button, "btn btn-primary btn-block", move || {
                    s.dispatch(ShellEvent::Navigate(Page::Adoption))
                })?
            }
            HelpAction::Donate => {
                let donation = Rc::clone(donation);
                action_button(way.button, "btn btn-primary btn-block", move || {
                    choose(&donation, DonationPlan::default_plan())
                })?
            }
            HelpAction::Info => {
                let s = state.clone();
                let title = way.title;
                action_button(way.button, "btn btn-primary btn-block", move || {
                    s.notify(ToastMessage::info(format!("{}: fale com a gente em contato@ajudatodos.org", title)))
                })?
            }
        };

        let item = ElementBuilder::new("div")?
            .class("card help-card")
            .child(ElementBuilder::new("div")?.class("help-icon").text(way.icon).build())?
            .child(ElementBuilder::new("h3")?.class("card-title").text(way.title).build())?
            .child(ElementBuilder::new("p")?.class("card-description").text(way.description).build())?
            .child(button)?
            .build();
        append_child(&grid, &item)?;
    }

    ElementBuilder::new("section")?
        .class("section")
        .child(section_title(
            "Como Você Pode Ajudar?",
            "Existem diversas formas de fazer a diferença na vida dos animais abandonados. Escolha a maneira que mais combina com você!",
        )?)?
        .child(grid)
        .map(ElementBuilder::build)
}

fn render_plans(donation: &Rc<RefCell<DonationViewModel>>) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("grid grid-3").build();

    for plan in PLANS.iter() {
        let class = if plan.highlight { "card plan-card plan-highlight" } else { "card plan-card" };
        let item = ElementBuilder::new("div")?.class(class).build();

        if plan.highlight {
            append_child(&item, &ElementBuilder::new("span")?.class("badge").text("Mais Popular").build())?;
        }
        append_child(&item, &ElementBuilder::new("h3")?.class("card-title").text(plan.name).build())?;
        append_child(
            &item,
            &ElementBuilder::new("p")?
                .class("plan-price")
                .text(&format!("R$ {}/mês", format_amount(plan.price)))
                .build(),
        )?;

        let benefits = ElementBuilder::new("ul")?.class("plan-benefits").build();
        for benefit in plan.benefits {
            append_child(&benefits, &ElementBuilder::new("li")?.text(&format!("• {}", benefit)).build())?;
        }
        append_child(&item, &benefits)?;

        let donation = Rc::clone(donation);
        append_child(
            &item,
            &action_button("Escolher Plano", "btn btn-primary btn-block", move || choose(&donation, plan))?,
        )?;
        append_child(&grid, &item)?;
    }

    ElementBuilder::new("section")?
        .class("section")
        .child(section_title(
            "Planos de Doação Mensal",
            "Torne-se um doador recorrente e ajude continuamente na manutenção do abrigo.",
        )?)?
        .child(grid)
        .map(ElementBuilder::build)
}

fn render_pix_dialog(state: &AppState, donation: &Rc<RefCell<DonationViewModel>>) -> Result<Element, JsValue> {
    let vm = donation.borrow();
    let body = ElementBuilder::new("div")?.class("pix-dialog").build();

    if let Some(payment) = vm.payment() {
        append_child(&body, &readonly_field("Valor", &format!("R$ {}", payment.amount))?)?;
        append_child(&body, &readonly_field("Chave PIX", &payment.pix_key)?)?;

        let textarea = ElementBuilder::new("textarea")?
            .class("form-input")
            .attr("rows", "3")?
            .flag("readonly", true)?
            .text(&payment.copy_paste)
            .build();
        let copy_group = ElementBuilder::new("div")?
            .class("form-group")
            .child(ElementBuilder::new("label")?.text("Copiar e colar (descrição)").build())?
            .child(textarea)?
            .build();
        append_child(&body, &copy_group)?;

        let s = state.clone();
        let text = vm.copy_text().unwrap_or_default();
        let copy = action_button("Copiar dados do PIX", "btn btn-primary btn-block", move || {
            let s = s.clone();
            let text = text.clone();
            spawn_local(async move {
                match clipboard_service::write_text(&text).await {
                    Ok(()) => s.notify(DonationViewModel::copied_toast()),
                    Err(e) => log::warn!("⚠️ [PIX] Falha ao copiar: {}", e),
                }
            });
        })?;
        append_child(&body, &copy)?;

        append_child(
            &body,
            &ElementBuilder::new("p")?
                .class("muted small")
                .text("Este é um exemplo de integração de pagamento com PIX estático. Em um ambiente real, estes dados viriam de uma API de pagamento.")
                .build(),
        )?;
    }

    let title = vm.dialog_title();
    drop(vm);

    let donation = Rc::clone(donation);
    modal(&title, body, move || {
        donation.borrow_mut().close_dialog();
        crate::schedule_render();
    })
}
