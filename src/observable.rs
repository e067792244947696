//! Publish-on-change primitives for UI binding.
//!
//! A UI binder subscribes closures to a [`Signal`] (or the signal inside an
//! [`Observable`]) and gets called synchronously, in subscription order,
//! whenever a new value is published.

use std::fmt;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

/// An ordered list of listeners for values of type `T`.
pub struct Signal<T> {
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T> Signal<T> {
    /// Create a signal with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until unsubscribed or the
    /// signal is cleared.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&T) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if `id` was not registered here.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Call every listener with `value`.
    pub fn emit(&mut self, value: &T) {
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }

    /// Drop all listeners.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// A value paired with a [`Signal`] that fires when it changes.
pub struct Observable<T> {
    value: T,
    changed: Signal<T>,
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("listeners", &self.changed.listener_count())
            .finish()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Observable<T> {
    /// Wrap an initial value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            changed: Signal::new(),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Subscribe to changes.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&T) + 'static,
    ) -> SubscriptionId {
        self.changed.subscribe(listener)
    }

    /// Unsubscribe a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Drop all listeners, keeping the value.
    pub fn clear_listeners(&mut self) {
        self.changed.clear();
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.changed.listener_count()
    }
}

impl<T: PartialEq> Observable<T> {
    /// Store `value`, publishing only if it differs from the current one.
    /// Returns whether anything was published.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.changed.emit(&self.value);
        true
    }
}

impl<T: Copy> Observable<T> {
    /// Current value by copy.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |v: &T| sink.borrow_mut().push(v.clone()))
    }

    #[test]
    fn signal_calls_listeners_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut signal = Signal::<u32>::new();
        let a = Rc::clone(&order);
        let _ = signal.subscribe(move |v| a.borrow_mut().push(("a", *v)));
        let b = Rc::clone(&order);
        let _ = signal.subscribe(move |v| b.borrow_mut().push(("b", *v)));

        signal.emit(&7);
        assert_eq!(*order.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let (seen, listener) = recorder::<u32>();
        let mut signal = Signal::new();
        let id = signal.subscribe(listener);
        signal.emit(&1);
        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.emit(&2);
        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn observable_set_publishes_only_on_change() {
        let (seen, listener) = recorder::<bool>();
        let mut obs = Observable::new(false);
        let _ = obs.subscribe(listener);

        assert!(!obs.set(false));
        assert!(obs.set(true));
        assert!(!obs.set(true));
        assert_eq!(*seen.borrow(), vec![true]);
        assert!(obs.value());
    }

    #[test]
    fn clear_listeners_keeps_value() {
        let mut obs = Observable::new(3_u8);
        let _ = obs.subscribe(|_| {});
        let _ = obs.subscribe(|_| {});
        assert_eq!(obs.listener_count(), 2);
        obs.clear_listeners();
        assert_eq!(obs.listener_count(), 0);
        assert_eq!(*obs.get(), 3);
    }
}
