//! Platform-independent URL state logic shared by the browser frontend.
//!
//! Everything here works on plain strings so it can be tested natively:
//! parsing the current location into a [`SerializedState`], merging a new
//! snapshot over it and composing the URL that should end up in history.

use indexmap::IndexMap;

pub mod config;
pub mod encoding;
pub mod location;
pub mod update;

pub use config::{ModeRoute, SyncConfig, DEFAULT_DEBOUNCE_MS, DEFAULT_MODE_KEY};
pub use encoding::{decode_component, encode_component};
pub use location::{extract_state, last_path_segment, parse_query, split_href};
pub use update::{compose_url, merge_states, plan_url_update, HistoryAction, UrlUpdate};

// ===== CORE DATA TYPES =====

/// Flat string-to-string map reflected in the URL query string.
///
/// Equality ignores insertion order; the order is only kept so composed URLs
/// stay stable between updates.
pub type SerializedState = IndexMap<String, String>;

/// Builds a [`SerializedState`] from borrowed pairs.
pub fn state_from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> SerializedState {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
