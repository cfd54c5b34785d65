//! Observable values backed by Leptos signals.
//!
//! A [`Writable`] keeps its value in an [`RwSignal`], so views read it like
//! any other signal, and keeps an ordered list of observers in a
//! [`StoredValue`]. Observers are called synchronously, in subscription order,
//! before [`Writable::set`] returns. Like a Svelte writable, a new observer is
//! also called once with the current value as soon as it subscribes.
//!
//! A `set` issued from inside an observer is delivered to every observer
//! before it returns. Observers that already saw that newer value are then
//! not handed the older one the outer `set` was still delivering.

use std::fmt;
use std::rc::Rc;

use leptos::*;

type Observer<T> = Rc<dyn Fn(&T)>;

struct Observers<T> {
    next_id: u64,
    version: u64,
    list: Vec<(u64, Observer<T>)>,
}

impl<T> Observers<T> {
    fn contains(&self, id: u64) -> bool {
        self.list.iter().any(|(i, _)| *i == id)
    }
}

/// Handle on an observable value. Copies refer to the same value, which
/// lives as long as the reactive owner it was created under.
pub struct Writable<T: 'static> {
    value: RwSignal<T>,
    observers: StoredValue<Observers<T>>,
}

impl<T: 'static> Clone for Writable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Writable<T> {}

impl<T: fmt::Debug + 'static> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Writable");
        self.value.with_untracked(|value| {
            s.field("value", value);
        });
        s.finish()
    }
}

impl<T: Clone + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: create_rw_signal(value),
            observers: store_value(Observers {
                next_id: 0,
                version: 0,
                list: Vec::new(),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.value.with(f)
    }

    /// Read side for views.
    pub fn signal(&self) -> ReadSignal<T> {
        self.value.read_only()
    }

    /// Replaces the value and notifies every observer before returning.
    pub fn set(&self, value: T) {
        self.observers.update_value(|o| o.version += 1);
        let (version, list) = self.observers.with_value(|o| (o.version, o.list.clone()));
        self.value.set(value.clone());
        for (id, observer) in list {
            let (current, subscribed) = self
                .observers
                .with_value(|o| (o.version, o.contains(id)));
            if current != version {
                // a nested set already reached the remaining observers
                break;
            }
            if subscribed {
                observer(&value);
            }
        }
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let value = self.value.with_untracked(f);
        self.set(value);
    }

    /// Registers `observer` and calls it right away with the current value.
    #[must_use = "dropping the subscription unsubscribes the observer"]
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let observer: Observer<T> = Rc::new(observer);
        let mut id = 0;
        self.observers.update_value(|o| {
            id = o.next_id;
            o.next_id += 1;
            o.list.push((id, observer.clone()));
        });
        observer(&self.value.get_untracked());
        let observers = self.observers;
        Subscription {
            stop: Some(Box::new(move || {
                observers.try_update_value(|o| o.list.retain(|(i, _)| *i != id));
            })),
        }
    }

    #[cfg(test)]
    pub(crate) fn observer_count(&self) -> usize {
        self.observers.with_value(|o| o.list.len())
    }
}

/// Handle returned by [`Writable::subscribe`].
///
/// The observer stays registered until the handle is dropped or
/// [`unsubscribe`](Subscription::unsubscribe)d, unless it is
/// [`detach`](Subscription::detach)ed.
pub struct Subscription {
    stop: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self)
    }

    /// Keeps the observer registered for as long as the value lives.
    pub fn detach(mut self) {
        self.stop = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.stop.is_some())
            .finish()
    }
}
