// ============================================================================
// REGISTER VIEW - Criação de conta
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::{AppState, ShellEvent};
use crate::viewmodels::register_viewmodel::register_outcome;
use crate::viewmodels::RegisterForm;
use crate::views::context::ViewContext;
use crate::views::widgets::{action_button, brand_header, text_field, FieldDef};

type Setter = fn(&mut RegisterForm, String);

const REGISTER_SUBTITLE: &str = "Crie sua conta para começar a ajudar";
const REGISTER_DESCRIPTION: &str = "Preencha seus dados para criar uma conta";

/// Campos na ordem do formulário: nome, e-mail, senha, confirmação
fn register_fields() -> [FieldDef<'static>; 4] {
    [
        FieldDef {
            id: "name",
            label: "Nome completo",
            input_type: "text",
            placeholder: "Seu nome",
            icon: "👤",
            required: true,
        },
        FieldDef {
            id: "email",
            label: "E-mail",
            input_type: "email",
            placeholder: "seu@email.com",
            icon: "✉️",
            required: true,
        },
        FieldDef {
            id: "password",
            label: "Senha",
            input_type: "password",
            placeholder: "••••••••",
            icon: "🔒",
            required: true,
        },
        FieldDef {
            id: "confirmPassword",
            label: "Confirmar senha",
            input_type: "password",
            placeholder: "Repita a senha",
            icon: "🔒",
            required: true,
        },
    ]
}

pub fn render_register(state: &AppState, ctx: &ViewContext) -> Result<Element, JsValue> {
    log::debug!("🎬 [REGISTER] render_register()");
    let form_values = ctx.register_form.borrow().clone();
    let vm = &ctx.register_vm;

    let form = ElementBuilder::new("form")?.class("auth-form").build();

    let values = [
        form_values.name.as_str(),
        form_values.email.as_str(),
        form_values.password.as_str(),
        form_values.confirm_password.as_str(),
    ];
    let setters: [Setter; 4] = [
        |f, v| f.name = v,
        |f, v| f.email = v,
        |f, v| f.password = v,
        |f, v| f.confirm_password = v,
    ];
    let fields = register_fields().into_iter().zip(values).zip(setters);
    for ((field, value), setter) in fields {
        append_child(&form, &text_field(field, &ctx.register_form, value, setter)?)?;
    }

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .flag("disabled", vm.is_loading())?
        .text(vm.submit_label())
        .build();
    append_child(&form, &submit)?;

    {
        let s = state.clone();
        let vm = vm.clone();
        let register_form = ctx.register_form.clone();
        on_submit(&form, move || {
            if vm.is_loading() {
                return;
            }
            let values = register_form.borrow().clone();
            let s = s.clone();
            let vm = vm.clone();
            spawn_local(async move {
                let result = vm.submit(&values).await;
                let (toast, event) = register_outcome(&result);
                if let Some(toast) = toast {
                    s.notify(toast);
                }
                match event {
                    Some(event) => s.dispatch(event),
                    None => crate::schedule_render(),
                }
            });
            crate::schedule_render();
        })?;
    }

    let login_link = {
        let s = state.clone();
        action_button("Entrar", "link", move || s.dispatch(ShellEvent::GoToLogin))?
    };
    let switch = ElementBuilder::new("p")?
        .class("auth-switch")
        .child(ElementBuilder::new("span")?.text("Já tem uma conta? ").build())?
        .child(login_link)?
        .build();

    let card = ElementBuilder::new("div")?
        .class("card auth-card")
        .child(ElementBuilder::new("h2")?.class("card-title").text("Cadastro").build())?
        .child(
            ElementBuilder::new("p")?
                .class("card-description")
                .text(REGISTER_DESCRIPTION)
                .build(),
        )?
        .child(form)?
        .child(switch)?
        .build();

    ElementBuilder::new("div")?
        .class("page auth-screen")
        .child(
            ElementBuilder::new("div")?
                .class("auth-container")
                .child(brand_header(REGISTER_SUBTITLE)?)?
                .child(card)?
                .build(),
        )
        .map(ElementBuilder::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_field_asks_to_repeat_password() {
        let fields = register_fields();
        let confirm = &fields[3];
        assert_eq!(confirm.id, "confirmPassword");
        assert_eq!(confirm.input_type, "password");
        assert_eq!(confirm.placeholder, "Repita a senha");
        assert!(fields.iter().all(|f| f.required));
    }

    #[test]
    fn page_copy() {
        assert_eq!(REGISTER_SUBTITLE, "Crie sua conta para começar a ajudar");
        assert_eq!(REGISTER_DESCRIPTION, "Preencha seus dados para criar uma conta");
    }
}
