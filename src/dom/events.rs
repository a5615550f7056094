// ============================================================================
// EVENT HANDLING - Listeners de DOM
// ============================================================================
// closure.forget() é seguro para listeners de elementos: quando o elemento é
// destruído (set_inner_html("")), o navegador descarta os listeners.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlTextAreaElement, MouseEvent};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit com preventDefault já aplicado
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Input de texto: entrega o valor atual do campo (input ou textarea)
pub fn on_input_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        let target = e.target();
        let value = target
            .as_ref()
            .and_then(|t| t.dyn_ref::<HtmlInputElement>().map(|i| i.value()))
            .or_else(|| {
                target
                    .as_ref()
                    .and_then(|t| t.dyn_ref::<HtmlTextAreaElement>().map(|a| a.value()))
            });
        if let Some(value) = value {
            handler(value);
        }
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
