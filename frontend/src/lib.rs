//! Browser URL ⇄ application state synchronization
//!
//! Keeps the query string of the address bar in sync with a [`WithState`]
//! entity: debounced state changes are written into history, and browser
//! navigation (back/forward) restores the state stored in the URL.
//!
//! ```rust,ignore
//! use urlsync::{StateCell, setup_browser_history};
//!
//! let app_state = StateCell::default();
//! let url_sync = setup_browser_history(app_state.clone())?;
//! app_state.set_field("city", "Oslo"); // ~200 ms later: `?city=Oslo`
//! ```

pub mod debounce;
pub mod history;
pub mod install;
pub mod state;
pub mod sync;

pub use debounce::debounce;
pub use history::{BrowserHistory, History, HistoryError, MemoryHistory};
pub use install::{UrlSyncHandle, setup_browser_history, setup_browser_history_with, state_change_task};
pub use state::{StateCell, WithState};
pub use sync::{SyncOutcome, UrlStateSync};

pub use urlsync_shared::{HistoryAction, ModeRoute, SerializedState, SyncConfig, UrlUpdate};
