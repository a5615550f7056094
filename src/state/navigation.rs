// ============================================================================
// NAVEGAÇÃO - Máquina de estados da sessão e da página atual
// ============================================================================
// Estado puro + reducer. A sessão admin sempre vence: enquanto existir,
// a view renderizada é o painel, independente de página ou overlay.
// ============================================================================

use crate::models::{Page, User};

/// Eventos que os filhos disparam para o shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    Navigate(Page),
    Login(User),
    Logout,
    GoToRegister,
    GoToLogin,
    OpenReportDialog,
    CloseReportDialog,
}

/// Efeitos colaterais que o reducer pede ao ambiente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEffect {
    ScrollToTop,
}

/// O que o shell renderiza
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedView {
    AdminDashboard,
    LoginOverlay,
    Visitor(Page),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    pub current_page: Page,
    pub user: Option<User>,
    pub show_login: bool,
    pub report_dialog_open: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn rendered_view(&self) -> RenderedView {
        if self.is_admin() {
            return RenderedView::AdminDashboard;
        }
        if self.show_login && self.user.is_none() {
            return RenderedView::LoginOverlay;
        }
        match self.current_page {
            Page::Register => RenderedView::Visitor(Page::Register),
            Page::Help => RenderedView::Visitor(Page::Help),
            Page::Adoption => RenderedView::Visitor(Page::Adoption),
            // admin/login como valor de página caem na home
            Page::Home | Page::Admin | Page::Login => RenderedView::Visitor(Page::Home),
        }
    }

    /// Aplica um evento e devolve os efeitos a executar
    pub fn apply(&mut self, event: ShellEvent) -> Vec<ShellEffect> {
        // Com sessão admin só logout/login alteram o estado
        if self.is_admin() && !matches!(event, ShellEvent::Logout | ShellEvent::Login(_)) {
            log::debug!("[NAV] Evento ignorado com sessão admin: {:?}", event);
            return Vec::new();
        }

        match event {
            ShellEvent::Navigate(Page::Login) => {
                // só abre o overlay; a página atual é mantida
                self.show_login = true;
                Vec::new()
            }
            ShellEvent::Navigate(page) => {
                self.current_page = page;
                vec![ShellEffect::ScrollToTop]
            }
            ShellEvent::Login(user) => {
                self.current_page = if user.is_admin { Page::Admin } else { Page::Home };
                self.user = Some(user);
                self.show_login = false;
                Vec::new()
            }
            ShellEvent::Logout => {
                self.user = None;
                self.current_page = Page::Home;
                self.show_login = false;
                Vec::new()
            }
            ShellEvent::GoToRegister => {
                self.show_login = false;
                self.current_page = Page::Register;
                Vec::new()
            }
            ShellEvent::GoToLogin => {
                self.show_login = true;
                Vec::new()
            }
            ShellEvent::OpenReportDialog => {
                self.report_dialog_open = true;
                Vec::new()
            }
            ShellEvent::CloseReportDialog => {
                self.report_dialog_open = false;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User::new("admin@ajudatodos.org", "Administradora", true)
    }

    fn visitor() -> User {
        User::new("joao@ex.com", "João", false)
    }

    const ALL_PAGES: [Page; 6] = [
        Page::Home,
        Page::Register,
        Page::Help,
        Page::Adoption,
        Page::Admin,
        Page::Login,
    ];

    #[test]
    fn starts_as_visitor_on_home() {
        let state = ShellState::new();
        assert_eq!(state.rendered_view(), RenderedView::Visitor(Page::Home));
        assert!(state.user.is_none());
        assert!(!state.show_login);
        assert!(!state.report_dialog_open);
    }

    #[test]
    fn navigate_sets_page_and_scrolls() {
        let mut state = ShellState::new();
        let effects = state.apply(ShellEvent::Navigate(Page::Adoption));
        assert_eq!(effects, vec![ShellEffect::ScrollToTop]);
        assert_eq!(state.rendered_view(), RenderedView::Visitor(Page::Adoption));
    }

    #[test]
    fn navigate_to_login_only_raises_overlay() {
        let mut state = ShellState::new();
        state.apply(ShellEvent::Navigate(Page::Adoption));
        let effects = state.apply(ShellEvent::Navigate(Page::Login));
        assert!(effects.is_empty());
        assert_eq!(state.current_page, Page::Adoption);
        assert!(state.show_login);
        assert_eq!(state.rendered_view(), RenderedView::LoginOverlay);
    }

    #[test]
    fn overlay_round_trip_lands_on_register_not_previous_page() {
        let mut state = ShellState::new();
        state.apply(ShellEvent::Navigate(Page::Adoption));
        state.apply(ShellEvent::Navigate(Page::Login));
        state.apply(ShellEvent::GoToRegister);
        assert_eq!(state.rendered_view(), RenderedView::Visitor(Page::Register));
        state.apply(ShellEvent::GoToLogin);
        assert_eq!(state.rendered_view(), RenderedView::LoginOverlay);
        assert_eq!(state.current_page, Page::Register);
    }

    #[test]
    fn admin_session_always_renders_dashboard() {
        let mut state = ShellState::new();
        state.apply(ShellEvent::Navigate(Page::Login));
        state.apply(ShellEvent::Login(admin()));
        assert_eq!(state.rendered_view(), RenderedView::AdminDashboard);

        for page in ALL_PAGES {
            state.apply(ShellEvent::Navigate(page));
            assert_eq!(state.rendered_view(), RenderedView::AdminDashboard);
        }
        state.apply(ShellEvent::GoToLogin);
        state.apply(ShellEvent::GoToRegister);
        state.apply(ShellEvent::OpenReportDialog);
        assert_eq!(state.rendered_view(), RenderedView::AdminDashboard);
        assert!(!state.report_dialog_open);
    }

    #[test]
    fn admin_session_ignores_navigation_without_scrolling() {
        let mut state = ShellState::new();
        state.apply(ShellEvent::Login(admin()));
        assert!(state.apply(ShellEvent::Navigate(Page::Help)).is_empty());
        assert_eq!(state.current_page, Page::Admin);
    }

    #[test]
    fn logout_from_admin_returns_to_home() {
        let mut state = ShellState::new();
        state.apply(ShellEvent::Navigate(Page::Help));
        state.apply(ShellEvent::Login(admin()));
        state.apply(ShellEvent::Logout);
        assert!(state.user.is_none());
        assert!(!state.show_login);
        assert_eq!(state.current_page, Page::Home);
        assert_eq!(state.rendered_view(), RenderedView::Visitor(Page::Home));
    }

    #[test]
    fn visitor_login_goes_home_and_clears_overlay() {
        let mut state = ShellState::new();
        state.apply(ShellEvent::Navigate(Page::Help));
        state.apply(ShellEvent::Navigate(Page::Login));
        state.apply(ShellEvent::Login(visitor()));
        assert_eq!(state.rendered_view(), RenderedView::Visitor(Page::Home));
        assert!(!state.show_login);
        assert_eq!(state.user, Some(visitor()));
    }

    #[test]
    fn overlay_is_not_rendered_once_logged_in() {
        let mut state = ShellState::new();
        state.apply(ShellEvent::Login(visitor()));
        state.apply(ShellEvent::Navigate(Page::Login));
        assert!(state.show_login);
        assert_eq!(state.rendered_view(), RenderedView::Visitor(Page::Home));
    }

    #[test]
    fn report_dialog_flag_is_independent() {
        let mut state = ShellState::new();
        state.apply(ShellEvent::OpenReportDialog);
        state.apply(ShellEvent::Navigate(Page::Help));
        assert!(state.report_dialog_open);
        state.apply(ShellEvent::CloseReportDialog);
        assert!(!state.report_dialog_open);
        assert_eq!(state.current_page, Page::Help);
    }
}
