//! History abstraction for the URL synchronizer
//!
//! Provides a unified interface over the address bar so the synchronizer
//! runs against the real browser or an in-memory stack (tests, non-browser hosts).

use urlsync_shared::{HistoryAction, UrlUpdate};

pub mod memory;
pub mod web;

pub use memory::MemoryHistory;
pub use web::BrowserHistory;

/// Error type for history operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// No `window` (or no `history` object) in the current context
    #[error("browser history is not available")]
    Unavailable,
    /// The browser API threw; carries the stringified JS value
    #[error("history API error: {0}")]
    Js(String),
}

/// Address bar access used by the synchronizer
pub trait History {
    /// Full current URL
    fn href(&self) -> Result<String, HistoryError>;

    /// Add a history entry for `url` and make it current
    fn push(&self, url: &str) -> Result<(), HistoryError>;

    /// Overwrite the current history entry with `url`
    fn replace(&self, url: &str) -> Result<(), HistoryError>;

    fn apply(&self, update: &UrlUpdate) -> Result<(), HistoryError> {
        match update.action {
            HistoryAction::Push => self.push(&update.url),
            HistoryAction::Replace => self.replace(&update.url),
        }
    }
}
