use std::cell::RefCell;
use std::rc::Rc;

use super::RouterError;

/// The navigation environment a router runs inside (the browser's location
/// and history in a web build).
///
/// The router reads the current path from it and records new entries with a
/// push-style call. Back/forward movement happens outside the router; the
/// owner forwards the resulting event to [`super::Router::handle_external_navigation`].
pub trait NavigationEnv {
    /// Path the environment currently shows.
    fn current_path(&self) -> String;

    /// Record `path` as a new history entry and make it current.
    fn push(&mut self, path: &str) -> Result<(), RouterError>;

    /// Step back one entry. Returns `false` at the start of history.
    fn back(&mut self) -> bool;

    /// Step forward one entry. Returns `false` at the end of history.
    fn forward(&mut self) -> bool;
}

#[derive(Debug)]
struct Entries {
    stack: Vec<String>,
    index: usize,
}

/// In-memory session history with browser semantics.
///
/// Pushing truncates any forward entries. Clones share the same history, so a
/// test (or a shell) can keep a handle and press "back" while the router owns
/// another clone.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Rc<RefCell<Entries>>,
}

impl MemoryHistory {
    /// Start a history whose only entry is `initial_path` (the load path).
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: Rc::new(RefCell::new(Entries { stack: vec![initial_path.into()], index: 0 })),
        }
    }

    /// Number of entries, including forward entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.entries.borrow().index
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().stack.clone()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl NavigationEnv for MemoryHistory {
    fn current_path(&self) -> String {
        let entries = self.entries.borrow();
        entries.stack[entries.index].clone()
    }

    fn push(&mut self, path: &str) -> Result<(), RouterError> {
        let mut entries = self.entries.borrow_mut();
        let keep = entries.index + 1;
        entries.stack.truncate(keep);
        entries.stack.push(path.to_string());
        entries.index = keep;
        Ok(())
    }

    fn back(&mut self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.index == 0 {
            return false;
        }
        entries.index -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.index + 1 >= entries.stack.len() {
            return false;
        }
        entries.index += 1;
        true
    }
}
