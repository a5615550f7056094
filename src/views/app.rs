// ============================================================================
// APP VIEW - Composição da árvore conforme a view renderizada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::Page;
use crate::state::{AppState, RenderedView};
use crate::views::context::ViewContext;
use crate::views::{
    render_admin_dashboard, render_adoption, render_footer, render_header, render_home,
    render_how_to_help, render_login, render_register, render_report_dialog, render_toaster,
};

pub fn render_app(state: &AppState, ctx: &ViewContext) -> Result<Element, JsValue> {
    let view = state.rendered_view();
    log::debug!("🔄 [APP] render_app() -> {:?}", view);

    let container = ElementBuilder::new("div")?.class("app-container").build();

    match view {
        RenderedView::AdminDashboard => {
            append_child(&container, &render_admin_dashboard(state)?)?;
        }
        RenderedView::LoginOverlay => {
            append_child(&container, &render_login(state, ctx)?)?;
        }
        RenderedView::Visitor(page) => {
            append_child(&container, &render_header(state)?)?;

            let main = ElementBuilder::new("main")?
                .class(&format!("main-content page-{}", page.as_str()))
                .build();
            let content = match page {
                Page::Register => render_register(state, ctx)?,
                Page::Help => render_how_to_help(state, ctx)?,
                Page::Adoption => render_adoption(state)?,
                // Admin e Login nunca chegam aqui como página visível
                Page::Home | Page::Admin | Page::Login => render_home(state)?,
            };
            append_child(&main, &content)?;
            append_child(&container, &main)?;

            append_child(&container, &render_footer()?)?;

            if state.shell.with(|shell| shell.report_dialog_open) {
                append_child(&container, &render_report_dialog(state, ctx)?)?;
            }
        }
    }

    append_child(&container, &render_toaster(state)?)?;
    Ok(container)
}
