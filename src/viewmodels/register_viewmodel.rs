// ============================================================================
// REGISTER VIEWMODEL - Validação e envio do cadastro
// ============================================================================

use std::cell::Cell;
use crate::error::{AppError, ValidationError};
use crate::models::ToastMessage;
use crate::services::auth_service::AuthBackend;
use crate::state::ShellEvent;

pub const REGISTER_SUCCESS_MESSAGE: &str = "Cadastro realizado com sucesso! Faça login para continuar.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Nome obrigatório primeiro, depois confirmação de senha
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

pub struct RegisterViewModel<B: AuthBackend> {
    backend: B,
    is_loading: Cell<bool>,
}

impl<B: AuthBackend> RegisterViewModel<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            is_loading: Cell::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() { "Cadastrando..." } else { "Criar conta" }
    }

    /// Valida localmente e só então chama o backend
    pub async fn submit(&self, form: &RegisterForm) -> Result<(), AppError> {
        form.validate()?;

        if self.is_loading.replace(true) {
            return Err(AppError::SubmissionInProgress);
        }
        let result = self
            .backend
            .register(&form.name, &form.email, &form.password)
            .await;
        self.is_loading.set(false);

        match &result {
            Ok(()) => log::info!("✅ [REGISTER] Conta criada para {}", form.email),
            Err(e) => log::warn!("⚠️ [REGISTER] Cadastro recusado: {}", e),
        }
        result.map_err(AppError::from)
    }
}

/// Toast e evento do shell para o resultado do cadastro
pub fn register_outcome(result: &Result<(), AppError>) -> (Option<ToastMessage>, Option<ShellEvent>) {
    match result {
        // depois de cadastrar, abre o login
        Ok(()) => (
            Some(ToastMessage::success(REGISTER_SUCCESS_MESSAGE)),
            Some(ShellEvent::GoToLogin),
        ),
        Err(AppError::SubmissionInProgress) => (None, None),
        Err(e) => (Some(ToastMessage::error(e.to_string())), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use crate::error::RequestFailure;
    use crate::models::{Page, ToastKind, User};
    use crate::services::auth_service::REGISTER_FALLBACK_MESSAGE;
    use crate::state::{RenderedView, ShellState};

    struct FakeBackend {
        reply: Result<(), RequestFailure>,
        requests: Rc<RefCell<Vec<(String, String)>>>,
    }

    #[async_trait(?Send)]
    impl AuthBackend for FakeBackend {
        async fn login(&self, _: &str, _: &str) -> Result<User, RequestFailure> {
            unreachable!("register view never logs in")
        }

        async fn register(&self, name: &str, email: &str, _password: &str) -> Result<(), RequestFailure> {
            self.requests.borrow_mut().push((name.to_string(), email.to_string()));
            self.reply.clone()
        }
    }

    fn view_model(reply: Result<(), RequestFailure>) -> (RegisterViewModel<FakeBackend>, Rc<RefCell<Vec<(String, String)>>>) {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let vm = RegisterViewModel::new(FakeBackend { reply, requests: requests.clone() });
        (vm, requests)
    }

    fn form(name: &str, password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            name: name.to_string(),
            email: "lia@ex.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn password_mismatch_never_reaches_the_network() {
        let (vm, requests) = view_model(Ok(()));
        let result = block_on(vm.submit(&form("Lia", "a", "b")));
        assert_eq!(result, Err(AppError::Validation(ValidationError::PasswordMismatch)));

        let (toast, event) = register_outcome(&result);
        let toast = toast.unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "As senhas não conferem.");
        assert!(event.is_none());
        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn blank_name_is_checked_before_passwords() {
        let (vm, requests) = view_model(Ok(()));
        let result = block_on(vm.submit(&form("   ", "a", "b")));
        assert_eq!(result, Err(AppError::Validation(ValidationError::EmptyName)));
        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn success_opens_login_overlay() {
        let (vm, requests) = view_model(Ok(()));
        let mut shell = ShellState::new();
        shell.apply(ShellEvent::Navigate(Page::Register));

        let result = block_on(vm.submit(&form("Lia", "senha", "senha")));
        let (toast, event) = register_outcome(&result);
        assert_eq!(toast.unwrap().message, REGISTER_SUCCESS_MESSAGE);
        shell.apply(event.unwrap());

        assert_eq!(shell.rendered_view(), RenderedView::LoginOverlay);
        assert_eq!(*requests.borrow(), vec![("Lia".to_string(), "lia@ex.com".to_string())]);
        assert!(!vm.is_loading());
    }

    #[test]
    fn server_message_is_shown_on_failure() {
        let (vm, _) = view_model(Err(RequestFailure::Rejected("E-mail já cadastrado".into())));
        let result = block_on(vm.submit(&form("Lia", "x", "x")));
        let (toast, event) = register_outcome(&result);
        assert_eq!(toast.unwrap().message, "E-mail já cadastrado");
        assert!(event.is_none());
    }

    #[test]
    fn fallback_message_when_server_is_silent() {
        let (vm, _) = view_model(Err(RequestFailure::Rejected(REGISTER_FALLBACK_MESSAGE.into())));
        let result = block_on(vm.submit(&form("Lia", "x", "x")));
        assert_eq!(register_outcome(&result).0.unwrap().message, REGISTER_FALLBACK_MESSAGE);
    }

    #[test]
    fn duplicate_submit_is_ignored_while_loading() {
        let (vm, requests) = view_model(Ok(()));
        vm.is_loading.set(true);
        assert_eq!(vm.submit_label(), "Cadastrando...");
        let result = block_on(vm.submit(&form("Lia", "x", "x")));
        assert_eq!(result, Err(AppError::SubmissionInProgress));
        assert!(requests.borrow().is_empty());
    }
}
