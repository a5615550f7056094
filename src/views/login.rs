// ============================================================================
// LOGIN VIEW - Formulário de e-mail/senha + botão do Google (opcional)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, on_input_value, on_submit, ElementBuilder};
use crate::services::GoogleIdentity;
use crate::state::{AppState, ShellEvent};
use crate::viewmodels::login_viewmodel::{identity_outcome, login_outcome, login_with_credential};
use crate::views::context::ViewContext;
use crate::views::widgets::{action_button, brand_header, text_field, FieldDef};

pub fn render_login(state: &AppState, ctx: &ViewContext) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");
    let form_state = ctx.login_form.borrow().clone();
    let vm = &ctx.login_vm;

    let form = ElementBuilder::new("form")?.class("auth-form").build();

    append_child(
        &form,
        &text_field(
            FieldDef {
                id: "email",
                label: "E-mail",
                input_type: "email",
                placeholder: "seu@email.com",
                icon: "✉️",
                required: true,
            },
            &ctx.login_form,
            &form_state.email,
            |f, v| f.email = v,
        )?,
    )?;

    // Senha com botão de mostrar/ocultar
    let password_input = ElementBuilder::new("input")?
        .id("password")?
        .attr("name", "password")?
        .attr("type", form_state.password_input_type())?
        .attr("placeholder", "••••••••")?
        .attr("value", &form_state.password)?
        .flag("required", true)?
        .class("form-input")
        .build();
    {
        let login_form = ctx.login_form.clone();
        on_input_value(&password_input, move |v| login_form.borrow_mut().password = v)?;
    }
    let toggle = {
        let login_form = ctx.login_form.clone();
        let label = if form_state.show_password { "🙈" } else { "👁️" };
        action_button(label, "password-toggle", move || {
            let mut f = login_form.borrow_mut();
            f.show_password = !f.show_password;
            drop(f);
            crate::schedule_render();
        })?
    };
    let password_group = ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", "password")?.text("Senha").build())?
        .child(
            ElementBuilder::new("div")?
                .class("input-with-icon")
                .child(ElementBuilder::new("span")?.class("input-icon").text("🔒").build())?
                .child(password_input)?
                .child(toggle)?
                .build(),
        )?
        .build();
    append_child(&form, &password_group)?;

    // Lembrar-me / Esqueceu a senha (apenas visual)
    let extras = ElementBuilder::new("div")?
        .class("form-extras")
        .child(
            ElementBuilder::new("label")?
                .class("checkbox")
                .child(ElementBuilder::new("input")?.attr("type", "checkbox")?.build())?
                .child(ElementBuilder::new("span")?.text("Lembrar-me").build())?
                .build(),
        )?
        .child(ElementBuilder::new("a")?.attr("href", "#")?.class("link").text("Esqueceu a senha?").build())?
        .build();
    append_child(&form, &extras)?;

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
        let login_form = ctx.login_form.clone();
        on_submit(&form, move || {
            if vm.is_loading() {
                return;
            }
            let form_values = login_form.borrow().clone();
            let s = s.clone();
            let vm = vm.clone();
            spawn_local(async move {
                let result = vm.submit(&form_values).await;
                let (toast, event) = login_outcome(&result);
                if let Some(toast) = toast {
                    s.notify(toast);
                }
                match event {
                    Some(event) => s.dispatch(event),
                    // sem mudança de estado: re-render para reabilitar o botão
                    None => crate::schedule_render(),
                }
            });
            // mostra "Entrando..." assim que a requisição começa
            crate::schedule_render();
        })?;
    }

    let google_container = ElementBuilder::new("div")?
        .id("googleLoginDiv")?
        .class("google-login")
        .build();
    mount_google_button(state, ctx, &google_container);

    let register_link = {
        let s = state.clone();
        action_button("Cadastre-se", "link", move || s.dispatch(ShellEvent::GoToRegister))?
    };
    let footer = ElementBuilder::new("p")?
        .class("auth-switch")
        .child(ElementBuilder::new("span")?.text("Não tem uma conta? ").build())?
        .child(register_link)?
        .build();

    let card = ElementBuilder::new("div")?
        .class("card auth-card")
        .child(ElementBuilder::new("h2")?.class("card-title").text("Login").build())?
        .child(
            ElementBuilder::new("p")?
                .class("card-description")
                .text("Entre com suas credenciais para acessar o sistema")
                .build(),
        )?
        .child(form)?
        .child(google_container)?
        .child(footer)?
        .build();

    ElementBuilder::new("div")?
        .class("auth-screen")
        .child(
            ElementBuilder::new("div")?
                .class("auth-container")
                .child(brand_header("Faça login para continuar")?)?
                .child(card)?
                .build(),
        )
        .map(ElementBuilder::build)
}

/// Renderiza o botão do Google se o script estiver carregado.
/// Ausência do script não é erro: a área fica vazia.
fn mount_google_button(state: &AppState, ctx: &ViewContext, container: &Element) {
    let Some(google) = GoogleIdentity::detect() else {
        log::debug!("[LOGIN] Google Identity indisponível, botão omitido");
        return;
    };

    if !ctx.identity_initialized.get() {
        if CONFIG.uses_placeholder_client_id() {
            log::warn!("⚠️ [LOGIN] GOOGLE_CLIENT_ID não configurado, usando placeholder");
        }
        let s = state.clone();
        let initialized = google.initialize(&CONFIG.google_client_id, move |credential| {
            let result = login_with_credential(&credential);
            let (toast, event) = identity_outcome(&result);
            s.notify(toast);
            if let Some(event) = event {
                s.dispatch(event);
            }
        });
        match initialized {
            Ok(()) => ctx.identity_initialized.set(true),
            Err(e) => {
                log::error!("❌ [LOGIN] Falha ao inicializar Google: {:?}", e);
                return;
            }
        }
    }

    if let Err(e) = google.render_button(container) {
        log::error!("❌ [LOGIN] Falha ao renderizar botão do Google: {:?}", e);
    }
}
