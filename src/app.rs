// ============================================================================
// APP - Aplicação principal: monta #app e re-renderiza a cada mudança
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::{AppState, RenderedView};
use crate::views::{render_app, render_toaster, ViewContext};

pub struct App {
    state: AppState,
    root: Element,
    context: ViewContext,
    last_view: Option<RenderedView>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("Elemento #app não encontrado"))?;

        let state = AppState::new();
        // Shell: árvore inteira. Toasts: só o toaster, para não destruir
        // formulários em edição nem o botão do Google
        state.subscribe_renderers(crate::schedule_render, crate::schedule_toaster_render);

        log::info!("✅ [APP] Aplicação criada");
        Ok(Self {
            state,
            root,
            context: ViewContext::new(),
            last_view: None,
        })
    }

    /// Re-render completo da árvore
    pub fn render(&mut self) -> Result<(), JsValue> {
        let view = self.state.rendered_view();
        self.context.remount(self.last_view, view);
        self.last_view = Some(view);

        set_inner_html(&self.root, "");
        let tree = render_app(&self.state, &self.context)?;
        append_child(&self.root, &tree)?;
        Ok(())
    }

    /// Substitui apenas o nó `.toaster` existente
    pub fn render_toaster(&self) -> Result<(), JsValue> {
        let Some(current) = self.root.query_selector(".toaster")? else {
            log::debug!("[APP] Toaster ausente, aguardando render completo");
            return Ok(());
        };
        let fresh = render_toaster(&self.state)?;
        current.replace_with_with_node_1(&fresh)
    }
}
