// ============================================================================
// REACTIVITY - Estado compartilhado com notificação de subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Valor reativo: clones compartilham o valor e os subscribers
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Lê o valor atual através de uma closure
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Atualiza o valor e notifica; devolve o resultado da closure
    pub fn update<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        // o borrow termina antes de notificar
        let result = updater(&mut self.value.borrow_mut());
        self.notify();
        result
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // copia a lista para permitir subscribe dentro de um callback
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(1);
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            state.subscribe(move || calls.set(calls.get() + 1));
        }

        let other = state.clone();
        other.set(5);
        assert_eq!(state.get(), 5);
        assert_eq!(calls.get(), 1);

        let doubled = state.update(|v| {
            *v *= 2;
            *v
        });
        assert_eq!(doubled, 10);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn subscriber_can_read_state_during_notification() {
        let state = ReactiveState::new(String::from("a"));
        let seen = Rc::new(RefCell::new(String::new()));
        {
            let reader = state.clone();
            let seen = seen.clone();
            state.subscribe(move || *seen.borrow_mut() = reader.get());
        }
        state.set("b".to_string());
        assert_eq!(*seen.borrow(), "b");
    }
}
