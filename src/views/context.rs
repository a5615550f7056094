// ============================================================================
// VIEW CONTEXT - Estado local das páginas entre re-renders
// ============================================================================
// O DOM é recriado a cada render; os formulários vivem aqui. Quando a view
// renderizada muda, o estado da view desmontada é descartado.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::Page;
use crate::services::HttpAuthBackend;
use crate::state::RenderedView;
use crate::viewmodels::{AnimalReport, DonationViewModel, LoginForm, LoginViewModel, RegisterForm, RegisterViewModel};

pub struct ViewContext {
    pub login_form: Rc<RefCell<LoginForm>>,
    pub login_vm: Rc<LoginViewModel<HttpAuthBackend>>,
    /// Google inicializado nesta montagem do login
    pub identity_initialized: Rc<Cell<bool>>,
    pub register_form: Rc<RefCell<RegisterForm>>,
    pub register_vm: Rc<RegisterViewModel<HttpAuthBackend>>,
    pub donation: Rc<RefCell<DonationViewModel>>,
    pub report: Rc<RefCell<AnimalReport>>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self {
            login_form: Rc::default(),
            login_vm: Rc::new(LoginViewModel::new(HttpAuthBackend::new())),
            identity_initialized: Rc::default(),
            register_form: Rc::default(),
            register_vm: Rc::new(RegisterViewModel::new(HttpAuthBackend::new())),
            donation: Rc::default(),
            report: Rc::default(),
        }
    }

    /// Descarta o estado da view que deixou de ser renderizada.
    /// Requisições pendentes seguem com o viewmodel antigo.
    pub fn remount(&mut self, previous: Option<RenderedView>, next: RenderedView) {
        let Some(previous) = previous else { return };
        if previous == next {
            return;
        }
        match previous {
            RenderedView::LoginOverlay => {
                self.login_form = Rc::default();
                self.login_vm = Rc::new(LoginViewModel::new(HttpAuthBackend::new()));
                self.identity_initialized = Rc::default();
            }
            RenderedView::Visitor(Page::Register) => {
                self.register_form = Rc::default();
                self.register_vm = Rc::new(RegisterViewModel::new(HttpAuthBackend::new()));
            }
            RenderedView::Visitor(Page::Help) => {
                self.donation = Rc::default();
            }
            _ => {}
        }
        log::debug!("[APP] Remontagem {:?} -> {:?}", previous, next);
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLANS;

    #[test]
    fn leaving_login_discards_typed_credentials() {
        let mut ctx = ViewContext::new();
        ctx.login_form.borrow_mut().email = "ze@ex.com".into();
        ctx.identity_initialized.set(true);

        ctx.remount(Some(RenderedView::LoginOverlay), RenderedView::LoginOverlay);
        assert_eq!(ctx.login_form.borrow().email, "ze@ex.com");

        ctx.remount(Some(RenderedView::LoginOverlay), RenderedView::Visitor(Page::Register));
        assert!(ctx.login_form.borrow().email.is_empty());
        assert!(!ctx.identity_initialized.get());
    }

    #[test]
    fn leaving_help_closes_pix_dialog() {
        let mut ctx = ViewContext::new();
        ctx.donation.borrow_mut().choose_plan(&PLANS[1]);
        ctx.register_form.borrow_mut().name = "Lia".into();

        ctx.remount(Some(RenderedView::Visitor(Page::Help)), RenderedView::Visitor(Page::Home));
        assert!(!ctx.donation.borrow().is_dialog_open());
        // register não estava montado, nada muda
        assert_eq!(ctx.register_form.borrow().name, "Lia");
    }

    #[test]
    fn first_render_keeps_everything() {
        let mut ctx = ViewContext::new();
        ctx.report.borrow_mut().location = "Parque".into();
        ctx.remount(None, RenderedView::AdminDashboard);
        assert_eq!(ctx.report.borrow().location, "Parque");
    }
}
