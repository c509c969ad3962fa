//! Single-slot "tree changed" notification.

use std::fmt;

/// Publish point for "the tree changed, query it again".
///
/// Holds at most one listener; subscribing replaces the previous one.
#[derive(Default)]
pub struct ChangeNotifier {
    listener: Option<Box<dyn FnMut()>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `listener`, replacing any previous one.
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn unsubscribe(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Calls the listener, if any.
    pub fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener();
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn notify_without_listener_is_a_no_op() {
        let mut notifier = ChangeNotifier::new();
        notifier.notify();
        assert!(!notifier.has_listener());
    }

    #[test]
    fn notify_calls_listener() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(move || seen.set(seen.get() + 1));

        notifier.notify();
        notifier.notify();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn subscribe_replaces_previous_listener() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut notifier = ChangeNotifier::new();

        let f = Rc::clone(&first);
        notifier.subscribe(move || f.set(f.get() + 1));
        let s = Rc::clone(&second);
        notifier.subscribe(move || s.set(s.get() + 1));

        notifier.notify();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn unsubscribe_clears_listener() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(move || seen.set(seen.get() + 1));
        notifier.unsubscribe();
        notifier.notify();
        assert_eq!(count.get(), 0);
    }
}
