#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value plus the callbacks that want to hear about changes to it.
///
/// Subscribers run synchronously inside `set`; they must not reach back into
/// whatever owns the observable.
pub struct Observable<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store `value` and notify subscribers. Returns false (and notifies no
    /// one) when the value is unchanged.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for (_, f) in self.subscribers.iter_mut() {
            f(&self.value);
        }
        true
    }

    /// Register `f` and immediately call it with the current value.
    pub fn subscribe(&mut self, mut f: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        f(&self.value);
        self.subscribers.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscribe_replays_then_tracks_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut obs = Observable::new(1);
        let s = seen.clone();
        let id = obs.subscribe(move |v| s.borrow_mut().push(*v));
        assert!(!obs.set(1));
        assert!(obs.set(2));
        assert!(obs.unsubscribe(id));
        assert!(obs.set(3));
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert!(!obs.unsubscribe(id));
    }
}
