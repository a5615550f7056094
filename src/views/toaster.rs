use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;

/// Pilha de toasts no canto superior direito; clique fecha
pub fn render_toaster(state: &AppState) -> Result<Element, JsValue> {
    let toaster = ElementBuilder::new("div")?
        .class("toaster toaster-top-right")
        .attr("aria-live", "polite")?
        .build();

    let toasts = state.toasts.with(|queue| queue.toasts().to_vec());
    for toast in toasts {
        let item = ElementBuilder::new("div")?
            .class(toast.kind.css_class())
            .attr("role", "status")?
            .text(&toast.message)
            .build();
        let state_clone = state.clone();
        on_click(&item, move |_| state_clone.dismiss_toast(toast.id))?;
        append_child(&toaster, &item)?;
    }

    Ok(toaster)
}
