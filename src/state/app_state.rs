// ============================================================================
// APP STATE - Estado global da aplicação
// ============================================================================

use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::models::{ToastMessage, User};
use crate::state::navigation::{RenderedView, ShellEffect, ShellEvent, ShellState};
use crate::state::notifications::ToastQueue;
use crate::state::reactivity::ReactiveState;

/// Estado global: shell (sessão + navegação) e fila de toasts.
/// Os clones compartilham os mesmos valores.
#[derive(Clone)]
pub struct AppState {
    pub shell: ReactiveState<ShellState>,
    pub toasts: ReactiveState<ToastQueue>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            shell: ReactiveState::new(ShellState::new()),
            toasts: ReactiveState::new(ToastQueue::new()),
        }
    }

    /// Aplica um evento ao shell; efeitos pedidos pelo reducer são devolvidos
    /// para quem despacha decidir como executá-los
    pub fn apply(&self, event: ShellEvent) -> Vec<ShellEffect> {
        log::info!("🧭 [NAV] {:?}", event);
        self.shell.update(|shell| shell.apply(event))
    }

    /// Aplica o evento e executa os efeitos no navegador
    pub fn dispatch(&self, event: ShellEvent) {
        for effect in self.apply(event) {
            match effect {
                ShellEffect::ScrollToTop => crate::dom::scroll_to_top(),
            }
        }
    }

    pub fn rendered_view(&self) -> RenderedView {
        self.shell.with(ShellState::rendered_view)
    }

    pub fn user(&self) -> Option<User> {
        self.shell.with(|shell| shell.user.clone())
    }

    pub fn snapshot(&self) -> ShellState {
        self.shell.get()
    }

    /// Enfileira um toast sem agendar remoção
    pub fn push_toast(&self, message: ToastMessage) -> u32 {
        self.toasts.update(|queue| queue.push(message))
    }

    /// Mostra um toast e agenda a remoção automática
    pub fn notify(&self, message: ToastMessage) {
        log::debug!("🔔 [TOAST] {:?}: {}", message.kind, message.message);
        let id = self.push_toast(message);
        let state = self.clone();
        Timeout::new(CONFIG.toast_duration_ms, move || {
            state.dismiss_toast(id);
        })
        .forget();
    }

    pub fn dismiss_toast(&self, id: u32) {
        // Evita re-render quando o toast já foi fechado manualmente
        let present = self.toasts.with(|queue| queue.toasts().iter().any(|t| t.id == id));
        if present {
            self.toasts.update(|queue| queue.dismiss(id));
        }
    }

    /// Liga os renderizadores: mudanças do shell refazem a árvore inteira,
    /// mudanças na fila de toasts refazem só o toaster
    pub fn subscribe_renderers<F, G>(&self, full_render: F, toaster_render: G)
    where
        F: Fn() + 'static,
        G: Fn() + 'static,
    {
        self.shell.subscribe(full_render);
        self.toasts.subscribe(toaster_render);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use crate::models::Page;

    #[test]
    fn clones_share_shell_state() {
        let state = AppState::new();
        let other = state.clone();
        other.apply(ShellEvent::Login(User::new("a@ex.com", "Ana", true)));
        assert_eq!(state.rendered_view(), RenderedView::AdminDashboard);
        assert_eq!(state.user().map(|u| u.name), Some("Ana".to_string()));
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn toast_lifecycle_only_rerenders_toaster() {
        let state = AppState::new();
        let (full_renders, full_render) = counter();
        let (toaster_renders, toaster_render) = counter();
        state.subscribe_renderers(full_render, toaster_render);

        let id = state.push_toast(ToastMessage::error("As senhas não conferem."));
        state.dismiss_toast(id);
        // já removido: nada a redesenhar
        state.dismiss_toast(id);

        assert_eq!(full_renders.get(), 0);
        assert_eq!(toaster_renders.get(), 2);
    }

    #[test]
    fn shell_events_rerender_full_tree() {
        let state = AppState::new();
        let (full_renders, full_render) = counter();
        let (toaster_renders, toaster_render) = counter();
        state.subscribe_renderers(full_render, toaster_render);

        state.apply(ShellEvent::Navigate(Page::Login));
        state.apply(ShellEvent::GoToRegister);

        assert_eq!(full_renders.get(), 2);
        assert_eq!(toaster_renders.get(), 0);
    }

    #[test]
    fn apply_returns_scroll_effect_for_page_changes() {
        let state = AppState::new();
        assert_eq!(state.apply(ShellEvent::Navigate(Page::Help)), vec![ShellEffect::ScrollToTop]);
        assert_eq!(state.snapshot().current_page, Page::Help);
    }
}
