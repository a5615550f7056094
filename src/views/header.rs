// ============================================================================
// HEADER - Navegação principal do visitante
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::Page;
use crate::state::{AppState, ShellEvent};
use crate::views::widgets::action_button;

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let shell = state.snapshot();

    let header = ElementBuilder::new("header")?.class("site-header").build();

    let brand = {
        let s = state.clone();
        action_button("🐾 AJUDATODOS", "brand", move || s.dispatch(ShellEvent::Navigate(Page::Home)))?
    };
    append_child(&header, &brand)?;

    let nav = ElementBuilder::new("nav")?.class("main-nav").build();
    for page in Page::NAV {
        let class = if shell.current_page == page { "nav-link active" } else { "nav-link" };
        let s = state.clone();
        let link = action_button(page.label(), class, move || s.dispatch(ShellEvent::Navigate(page)))?;
        append_child(&nav, &link)?;
    }
    append_child(&header, &nav)?;

    let actions = ElementBuilder::new("div")?.class("header-actions").build();
    {
        let s = state.clone();
        let report = action_button("🚨 Denunciar", "btn btn-danger", move || {
            s.dispatch(ShellEvent::OpenReportDialog)
        })?;
        append_child(&actions, &report)?;
    }

    match &shell.user {
        Some(user) => {
            let greeting = ElementBuilder::new("span")?
                .class("user-greeting")
                .attr("title", &user.email)?
                .text(&format!("Olá, {}", user.first_name()))
                .build();
            append_child(&actions, &greeting)?;

            let s = state.clone();
            let logout = action_button("Sair", "btn btn-outline", move || {
                log::info!("🚪 [NAV] Logout");
                s.dispatch(ShellEvent::Logout)
            })?;
            append_child(&actions, &logout)?;
        }
        None => {
            let class = if shell.current_page == Page::Register { "btn btn-outline active" } else { "btn btn-outline" };
            let s = state.clone();
            let register = action_button(Page::Register.label(), class, move || {
                s.dispatch(ShellEvent::Navigate(Page::Register))
            })?;
            append_child(&actions, &register)?;

            let s = state.clone();
            let login = action_button(Page::Login.label(), "btn btn-primary", move || {
                s.dispatch(ShellEvent::Navigate(Page::Login))
            })?;
            append_child(&actions, &login)?;
        }
    }
    append_child(&header, &actions)?;

    Ok(header)
}
