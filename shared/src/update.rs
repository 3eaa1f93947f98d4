//! Planning the URL that should follow a state snapshot.

use crate::{SerializedState, SyncConfig, encode_component, extract_state, split_href};

/// How a planned URL enters browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    /// New history entry; back returns to the previous state.
    Push,
    /// Overwrite the current entry; used when the URL carried no state yet.
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlUpdate {
    pub url: String,
    pub action: HistoryAction,
    pub state: SerializedState,
}

/// Overlays `new_state` on the state currently in the URL.
///
/// The mode key is never carried over from the URL side, and keys whose new
/// value is missing or empty are dropped.
pub fn merge_states(
    url_state: &SerializedState,
    new_state: &SerializedState,
    mode_key: &str,
) -> SerializedState {
    let mut merged = url_state.clone();
    merged.shift_remove(mode_key);

    for (key, value) in new_state {
        merged.insert(key.clone(), value.clone());
    }

    merged.retain(|key, _| new_state.get(key).is_some_and(|value| !value.is_empty()));
    merged
}

/// `base?k=v&...` with encoded values; an empty state leaves just `base`.
pub fn compose_url(base: &str, state: &SerializedState) -> String {
    if state.is_empty() {
        return base.to_string();
    }
    let query = state
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base, query)
}

/// Computes the history mutation for a new snapshot, or `None` if the URL
/// would stay the same.
pub fn plan_url_update(
    href: &str,
    new_state: &SerializedState,
    config: &SyncConfig,
) -> Option<UrlUpdate> {
    let mut url_state = extract_state(href, config);
    url_state.shift_remove(&config.mode_key);

    let action = if url_state.is_empty() {
        HistoryAction::Replace
    } else {
        HistoryAction::Push
    };

    let state = merge_states(&url_state, new_state, &config.mode_key);
    let (base, _) = split_href(href);
    let url = compose_url(base, &state);

    if url == href {
        return None;
    }
    Some(UrlUpdate { url, action, state })
}
