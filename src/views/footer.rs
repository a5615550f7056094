use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;

pub fn render_footer() -> Result<Element, JsValue> {
    ElementBuilder::new("footer")?
        .class("site-footer")
        .child(ElementBuilder::new("div")?.class("footer-brand").text("🐾 AJUDATODOS").build())?
        .child(
            ElementBuilder::new("p")?
                .class("muted")
                .text("Resgate, cuidado e adoção responsável de animais abandonados.")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("footer-contact")
                .text("contato@ajudatodos.org · (11) 4002-8922")
                .build(),
        )
        .map(ElementBuilder::build)
}
