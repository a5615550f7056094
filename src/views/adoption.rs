use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::{ToastMessage, ANIMALS};
use crate::state::AppState;
use crate::views::widgets::{action_button, section_title};

/// Página de adoção: catálogo estático de animais
pub fn render_adoption(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?
        .class("page page-adoption")
        .child(section_title(
            "Adote um Amigo",
            "Todos os animais são vacinados, vermifugados e castrados antes da adoção.",
        )?)?
        .build();

    let grid = ElementBuilder::new("div")?.class("grid grid-3").build();
    for animal in ANIMALS.iter() {
        let s = state.clone();
        let name = animal.name;
        let adopt = action_button(&format!("Quero adotar {}", animal.name), "btn btn-primary btn-block", move || {
            s.notify(ToastMessage::info(format!(
                "Que ótimo! Entre em contato com o abrigo para conhecer {}.",
                name
            )))
        })?;

        let item = ElementBuilder::new("div")?
            .class("card animal-card")
            .child(ElementBuilder::new("div")?.class("animal-photo").text(animal.species.icon()).build())?
            .child(ElementBuilder::new("h3")?.class("card-title").text(animal.name).build())?
            .child(
                ElementBuilder::new("p")?
                    .class("animal-meta")
                    .text(&format!("{} · {}", animal.species.label(), animal.age))
                    .build(),
            )?
            .child(ElementBuilder::new("p")?.class("card-description").text(animal.description).build())?
            .child(adopt)?
            .build();
        append_child(&grid, &item)?;
    }
    append_child(&page, &grid)?;

    Ok(page)
}
