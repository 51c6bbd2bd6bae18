//! Change notification for single-threaded state owners.
//!
//! State owners (the router, the favorites store) hold a `Subscribers<T>` and
//! hand out `Subscription` guards. A view registers on mount and keeps the
//! guard alive for as long as it is mounted; dropping the guard unregisters
//! the handler on every exit path.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Handler<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
}

/// A list of change handlers for values of type `T`.
pub struct Subscribers<T: 'static> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers").field("len", &self.len()).finish()
    }
}

impl<T: 'static> Subscribers<T> {
    pub fn new() -> Self {
        Self { registry: Rc::new(RefCell::new(Registry { next_id: 0, handlers: Vec::new() })) }
    }

    /// Register `handler`; it stays registered until the returned guard is dropped.
    #[must_use = "dropping the Subscription immediately unsubscribes the handler"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let handler: Handler<T> = Rc::new(RefCell::new(handler));
        registry.handlers.push((id, handler));

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().handlers.retain(|(hid, _)| *hid != id);
                }
            })),
        }
    }

    /// Call every registered handler with `value`, in registration order.
    ///
    /// Handlers run against a snapshot of the list, so they may subscribe or
    /// unsubscribe while being notified. A handler that is already running
    /// (re-entrant notify) is skipped rather than called recursively.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Handler<T>> =
            self.registry.borrow().handlers.iter().map(|(_, h)| Rc::clone(h)).collect();
        for handler in snapshot {
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (*handler)(value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scoped registration handle. Unsubscribes when dropped.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Explicitly unsubscribe. Equivalent to dropping the guard.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}
