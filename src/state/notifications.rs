// ============================================================================
// TOASTS - Fila de notificações transitórias
// ============================================================================

use crate::models::{Toast, ToastMessage};

/// Máximo de toasts visíveis ao mesmo tempo; os mais antigos saem primeiro
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enfileira e devolve o id atribuído
    pub fn push(&mut self, message: ToastMessage) -> u32 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind: message.kind,
            message: message.message,
        });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove um toast; devolve false se ele já tinha saído
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
