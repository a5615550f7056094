// ============================================================================
// LOGIN VIEWMODEL - Estado do formulário e lógica de login
// ============================================================================

use std::cell::Cell;
use crate::error::AppError;
use crate::models::{ToastMessage, User};
use crate::services::auth_service::AuthBackend;
use crate::services::identity_service::decode_credential;
use crate::state::ShellEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

impl LoginForm {
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }
}

/// ViewModel de login. `is_loading` impede reenvio enquanto a requisição
/// desta instância está pendente.
pub struct LoginViewModel<B: AuthBackend> {
    backend: B,
    is_loading: Cell<bool>,
}

impl<B: AuthBackend> LoginViewModel<B> {
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
        if self.is_loading() { "Entrando..." } else { "Entrar" }
    }

    /// Envia as credenciais; uma única tentativa
    pub async fn submit(&self, form: &LoginForm) -> Result<User, AppError> {
        if self.is_loading.replace(true) {
            return Err(AppError::SubmissionInProgress);
        }
        let result = self.backend.login(&form.email, &form.password).await;
        self.is_loading.set(false);

        match &result {
            Ok(user) => log::info!("✅ [LOGIN] Login ok ({}, admin={})", user.email, user.is_admin),
            Err(e) => log::warn!("⚠️ [LOGIN] Login recusado: {:?}", e),
        }
        result.map_err(AppError::from)
    }
}

/// Login pelo provedor de identidade: decodifica o token, nunca admin
pub fn login_with_credential(token: &str) -> Result<User, AppError> {
    decode_credential(token).map(|claims| claims.into_user())
}

/// Toast e evento do shell para o resultado do login por formulário
pub fn login_outcome(result: &Result<User, AppError>) -> (Option<ToastMessage>, Option<ShellEvent>) {
    match result {
        Ok(user) => (
            Some(ToastMessage::success(format!("Bem-vindo, {}!", user.name))),
            Some(ShellEvent::Login(user.clone())),
        ),
        Err(AppError::SubmissionInProgress) => (None, None),
        // qualquer outra falha tem a mesma mensagem genérica
        Err(_) => (Some(ToastMessage::error("Email ou senha inválidos")), None),
    }
}

/// Toast e evento do shell para o resultado do login via Google
pub fn identity_outcome(result: &Result<User, AppError>) -> (ToastMessage, Option<ShellEvent>) {
    match result {
        Ok(user) => (
            ToastMessage::success(format!("Bem-vindo, {}! (Google)", user.name)),
            Some(ShellEvent::Login(user.clone())),
        ),
        Err(e) => {
            log::error!("❌ [LOGIN] Token do Google inválido: {:?}", e);
            (ToastMessage::error("Erro ao processar login com Google."), None)
        }
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
    use crate::models::{Page, ToastKind};
    use crate::state::{RenderedView, ShellState};

    /// Backend falso que responde como o servidor responderia com o status dado
    struct FakeBackend {
        status: u16,
        calls: Rc<RefCell<Vec<String>>>,
    }

    #[async_trait(?Send)]
    impl AuthBackend for FakeBackend {
        async fn login(&self, email: &str, _password: &str) -> Result<User, RequestFailure> {
            self.calls.borrow_mut().push(email.to_string());
            if self.status == 200 {
                Ok(User::new(email, "Renata", email.starts_with("admin")))
            } else {
                Err(RequestFailure::InvalidCredentials)
            }
        }

        async fn register(&self, _: &str, _: &str, _: &str) -> Result<(), RequestFailure> {
            unreachable!("login view never registers")
        }
    }

    fn view_model(status: u16) -> (LoginViewModel<FakeBackend>, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let vm = LoginViewModel::new(FakeBackend { status, calls: calls.clone() });
        (vm, calls)
    }

    fn form(email: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: "segredo".to_string(),
            show_password: false,
        }
    }

    #[test]
    fn unauthorized_keeps_shell_in_login_overlay() {
        let (vm, calls) = view_model(401);
        let mut shell = ShellState::new();
        shell.apply(ShellEvent::Navigate(Page::Login));

        let result = block_on(vm.submit(&form("ze@ex.com")));
        assert_eq!(result, Err(AppError::Request(RequestFailure::InvalidCredentials)));

        let (toast, event) = login_outcome(&result);
        assert_eq!(toast.map(|t| t.kind), Some(ToastKind::Error));
        assert!(event.is_none());
        assert!(shell.user.is_none());
        assert_eq!(shell.rendered_view(), RenderedView::LoginOverlay);
        assert_eq!(calls.borrow().len(), 1);
        assert!(!vm.is_loading());
    }

    #[test]
    fn admin_login_switches_to_dashboard() {
        let (vm, _) = view_model(200);
        let mut shell = ShellState::new();
        shell.apply(ShellEvent::Navigate(Page::Login));

        let result = block_on(vm.submit(&form("admin@ajudatodos.org")));
        let (toast, event) = login_outcome(&result);
        assert_eq!(toast.unwrap().message, "Bem-vindo, Renata!");
        shell.apply(event.unwrap());
        assert_eq!(shell.rendered_view(), RenderedView::AdminDashboard);
    }

    #[test]
    fn pending_request_blocks_resubmission() {
        let (vm, calls) = view_model(200);
        vm.is_loading.set(true);
        assert_eq!(vm.submit_label(), "Entrando...");
        let result = block_on(vm.submit(&form("ze@ex.com")));
        assert_eq!(result, Err(AppError::SubmissionInProgress));
        assert_eq!(login_outcome(&result), (None, None));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn google_credential_logs_in_as_regular_user() {
        // payload: {"email":"g@gmail.com","name":"Gabi"}
        let token = "x.eyJlbWFpbCI6ImdAZ21haWwuY29tIiwibmFtZSI6IkdhYmkifQ.y";
        let result = login_with_credential(token);
        let (toast, event) = identity_outcome(&result);
        assert_eq!(toast.message, "Bem-vindo, Gabi! (Google)");
        assert_eq!(event, Some(ShellEvent::Login(User::new("g@gmail.com", "Gabi", false))));
    }

    #[test]
    fn broken_google_credential_shows_error() {
        let result = login_with_credential("");
        let (toast, event) = identity_outcome(&result);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Erro ao processar login com Google.");
        assert!(event.is_none());
    }

    #[test]
    fn password_visibility_toggle() {
        let mut f = LoginForm::default();
        assert_eq!(f.password_input_type(), "password");
        f.show_password = true;
        assert_eq!(f.password_input_type(), "text");
    }
}
