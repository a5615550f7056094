// ============================================================================
// REPORT DIALOG - Denúncia de animal abandonado
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_input_value, on_submit, ElementBuilder};
use crate::models::ToastMessage;
use crate::state::{AppState, ShellEvent};
use crate::viewmodels::report_viewmodel::submit_report;
use crate::views::context::ViewContext;
use crate::views::widgets::{modal, text_field, FieldDef};

fn location_field() -> FieldDef<'static> {
    FieldDef {
        id: "reportLocation",
        label: "Local",
        input_type: "text",
        placeholder: "Rua, bairro, ponto de referência",
        icon: "📍",
        required: true,
    }
}

fn contact_field() -> FieldDef<'static> {
    FieldDef {
        id: "reportContact",
        label: "Contato (opcional)",
        input_type: "text",
        placeholder: "Telefone ou e-mail",
        icon: "📞",
        required: false,
    }
}

pub fn render_report_dialog(state: &AppState, ctx: &ViewContext) -> Result<Element, JsValue> {
    let values = ctx.report.borrow().clone();

    // validação própria (toast), sem a do navegador
    let form = ElementBuilder::new("form")?
        .class("report-form")
        .flag("novalidate", true)?
        .build();

    append_child(
        &form,
        &text_field(
            location_field(),
            &ctx.report,
            &values.location,
            |r, v| r.location = v,
        )?,
    )?;

    let description = ElementBuilder::new("textarea")?
        .id("reportDescription")?
        .attr("rows", "4")?
        .attr("placeholder", "Descreva o animal e a situação")?
        .class("form-input")
        .text(&values.description)
        .build();
    {
        let report = ctx.report.clone();
        on_input_value(&description, move |v| report.borrow_mut().description = v)?;
    }
    let description_group = ElementBuilder::new("div")?
        .class("form-group")
        .child(
            ElementBuilder::new("label")?
                .attr("for", "reportDescription")?
                .text("Descrição")
                .build(),
        )?
        .child(description)?
        .build();
    append_child(&form, &description_group)?;

    append_child(
        &form,
        &text_field(
            contact_field(),
            &ctx.report,
            &values.contact,
            |r, v| r.contact = v,
        )?,
    )?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-danger btn-block")
        .text("Enviar denúncia")
        .build();
    append_child(&form, &submit)?;

    {
        let s = state.clone();
        let report = ctx.report.clone();
        on_submit(&form, move || {
            let result = submit_report(&mut report.borrow_mut());
            match result {
                Ok(toast) => {
                    s.notify(toast);
                    s.dispatch(ShellEvent::CloseReportDialog);
                }
                Err(e) => s.notify(ToastMessage::error(e.to_string())),
            }
        })?;
    }

    let s = state.clone();
    modal("🚨 Denunciar Abandono", form, move || {
        s.dispatch(ShellEvent::CloseReportDialog)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_location_is_required() {
        assert!(location_field().required);
        assert!(!contact_field().required);
    }
}
