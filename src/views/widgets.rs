// ============================================================================
// WIDGETS - Peças reutilizadas pelas páginas
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, on_input_value, ElementBuilder};

pub fn button(text: &str, class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(class)
        .text(text)
        .build())
}

/// Botão que executa `action` ao clicar
pub fn action_button<F>(text: &str, class: &str, mut action: F) -> Result<Element, JsValue>
where
    F: FnMut() + 'static,
{
    let btn = button(text, class)?;
    on_click(&btn, move |_| action())?;
    Ok(btn)
}

/// Campo de formulário ligado a um valor do estado local
pub struct FieldDef<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub input_type: &'a str,
    pub placeholder: &'a str,
    pub icon: &'a str,
    pub required: bool,
}

pub fn text_field<T, F>(field: FieldDef<'_>, form: &Rc<RefCell<T>>, value: &str, setter: F) -> Result<Element, JsValue>
where
    T: 'static,
    F: Fn(&mut T, String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .id(field.id)?
        .attr("name", field.id)?
        .attr("type", field.input_type)?
        .attr("placeholder", field.placeholder)?
        .attr("value", value)?
        .flag("required", field.required)?
        .class("form-input")
        .build();

    let form = Rc::clone(form);
    on_input_value(&input, move |v| setter(&mut form.borrow_mut(), v))?;

    let wrapper = ElementBuilder::new("div")?
        .class("input-with-icon")
        .child(ElementBuilder::new("span")?.class("input-icon").text(field.icon).build())?
        .child(input)?
        .build();

    ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", field.id)?.text(field.label).build())?
        .child(wrapper)
        .map(ElementBuilder::build)
}

/// Campo somente leitura (diálogo PIX)
pub fn readonly_field(label: &str, value: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.text(label).build())?
        .child(
            ElementBuilder::new("input")?
                .attr("value", value)?
                .flag("readonly", true)?
                .class("form-input")
                .build(),
        )
        .map(ElementBuilder::build)
}

/// Cabeçalho com a pata e o nome do projeto (login/cadastro)
pub fn brand_header(subtitle: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("brand-header")
        .child(ElementBuilder::new("div")?.class("brand-logo").text("🐾").build())?
        .child(ElementBuilder::new("h1")?.text("AJUDATODOS").build())?
        .child(ElementBuilder::new("p")?.class("muted").text(subtitle).build())
        .map(ElementBuilder::build)
}

pub fn card(title: &str, description: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("card")
        .child(ElementBuilder::new("h3")?.class("card-title").text(title).build())?
        .child(ElementBuilder::new("p")?.class("card-description").text(description).build())
        .map(ElementBuilder::build)
}

/// Título de seção centralizado
pub fn section_title(title: &str, subtitle: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("section-title")
        .child(ElementBuilder::new("h2")?.text(title).build())?
        .child(ElementBuilder::new("p")?.class("muted").text(subtitle).build())
        .map(ElementBuilder::build)
}

/// Modal com overlay; clicar no X ou fora do diálogo chama `on_close`
pub fn modal<F>(title: &str, body: Element, on_close: F) -> Result<Element, JsValue>
where
    F: Fn() + 'static,
{
    let on_close = Rc::new(on_close);

    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    {
        let on_close = Rc::clone(&on_close);
        let overlay_ref = overlay.clone();
        on_click(&overlay, move |e| {
            // só fecha quando o clique foi no próprio overlay
            let on_overlay = e
                .target()
                .and_then(|t| wasm_bindgen::JsCast::dyn_into::<Element>(t).ok())
                .is_some_and(|t| t == overlay_ref);
            if on_overlay {
                on_close();
            }
        })?;
    }

    let close_btn = {
        let on_close = Rc::clone(&on_close);
        action_button("✕", "modal-close", move || on_close())?
    };

    let dialog = ElementBuilder::new("div")?
        .class("modal")
        .attr("role", "dialog")?
        .child(
            ElementBuilder::new("div")?
                .class("modal-header")
                .child(ElementBuilder::new("h2")?.text(title).build())?
                .child(close_btn)?
                .build(),
        )?
        .child(body)?
        .build();

    append_child(&overlay, &dialog)?;
    Ok(overlay)
}
