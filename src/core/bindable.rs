//! Observable value cells.
//!
//! A `Bindable<T>` is a mutable cell with a list of subscribers that are
//! notified synchronously when the value changes. Everything runs on the UI
//! thread; there is no cross-thread delivery.

type Subscriber<T> = Box<dyn FnMut(&T)>;

pub struct Bindable<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Bindable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bindable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T: Default> Default for Bindable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Bindable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a change subscriber. With `fire_now`, the subscriber is
    /// invoked once immediately with the current value.
    pub fn bind(&mut self, mut subscriber: impl FnMut(&T) + 'static, fire_now: bool) {
        if fire_now {
            subscriber(&self.value);
        }
        self.subscribers.push(Box::new(subscriber));
    }
}

impl<T: PartialEq> Bindable<T> {
    /// Store a new value, notifying subscribers only when it differs.
    pub fn set(&mut self, value: T) {
        if self.value == value {
            return;
        }
        self.value = value;
        for subscriber in &mut self.subscribers {
            subscriber(&self.value);
        }
    }
}

impl<T: Copy> Bindable<T> {
    pub fn value(&self) -> T {
        self.value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/bindable.rs"]
mod tests;
