// ============================================================================
// STATE MODULE - Estado com Rc<RefCell> + notificações
// ============================================================================

pub mod reactivity;
pub mod navigation;
pub mod notifications;
pub mod app_state;

pub use reactivity::ReactiveState;
pub use navigation::{RenderedView, ShellEffect, ShellEvent, ShellState};
pub use notifications::ToastQueue;
pub use app_state::AppState;
