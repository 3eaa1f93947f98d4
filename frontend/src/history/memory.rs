//! In-memory history stack with browser push/replace/back/forward semantics.

use super::{History, HistoryError};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct Entries {
    urls: Vec<String>,
    current: usize,
}

/// History kept in memory; clones share the same stack.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Rc<RefCell<Entries>>,
}

impl MemoryHistory {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: Rc::new(RefCell::new(Entries {
                urls: vec![initial_url.into()],
                current: 0,
            })),
        }
    }

    /// Moves one entry back; returns `false` at the start of history.
    pub fn back(&self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.current == 0 {
            return false;
        }
        entries.current -= 1;
        true
    }

    /// Moves one entry forward; returns `false` at the end of history.
    pub fn forward(&self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.current + 1 >= entries.urls.len() {
            return false;
        }
        entries.current += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().urls.is_empty()
    }

    pub fn current_url(&self) -> String {
        let entries = self.entries.borrow();
        entries.urls[entries.current].clone()
    }
}

impl History for MemoryHistory {
    fn href(&self) -> Result<String, HistoryError> {
        Ok(self.current_url())
    }

    fn push(&self, url: &str) -> Result<(), HistoryError> {
        let mut entries = self.entries.borrow_mut();
        let keep = entries.current + 1;
        entries.urls.truncate(keep);
        entries.urls.push(url.to_string());
        entries.current = keep;
        Ok(())
    }

    fn replace(&self, url: &str) -> Result<(), HistoryError> {
        let mut entries = self.entries.borrow_mut();
        let current = entries.current;
        entries.urls[current] = url.to_string();
        Ok(())
    }
}
