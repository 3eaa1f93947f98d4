//! The snapshot/restore capability the synchronizer binds to.

use urlsync_shared::SerializedState;
use zoon::{Mutable, Signal, SignalExt};

/// Application state that can be mirrored in the URL.
///
/// There is no implicit reactive runtime to track reads, so implementors
/// expose changes explicitly through [`WithState::serialized_signal`].
pub trait WithState {
    /// Current snapshot of the URL-relevant state.
    fn serialize(&self) -> SerializedState;

    /// Restores state previously produced by [`WithState::serialize`].
    /// Keys missing from `state` should fall back to their defaults.
    fn deserialize(&self, state: SerializedState);

    /// Emits the snapshot whenever it changes, starting with the current one.
    fn serialized_signal(&self) -> impl Signal<Item = SerializedState> + 'static;
}

/// Minimal [`WithState`] holder backed by a single `Mutable` map.
#[derive(Clone, Debug, Default)]
pub struct StateCell {
    state: Mutable<SerializedState>,
}

impl StateCell {
    pub fn new(initial: SerializedState) -> Self {
        Self {
            state: Mutable::new(initial),
        }
    }

    /// Sets one field; an empty value removes it from the URL on the next update.
    pub fn set_field(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let mut state = self.state.lock_mut();
        if state.get(&key) != Some(&value) {
            state.insert(key, value);
        }
    }

    pub fn remove_field(&self, key: &str) {
        let mut state = self.state.lock_mut();
        if state.contains_key(key) {
            state.shift_remove(key);
        }
    }

    pub fn field_signal(&self, key: &str) -> impl Signal<Item = Option<String>> + use<> {
        let key = key.to_string();
        self.state
            .signal_ref(move |state| state.get(&key).cloned())
            .dedupe_cloned()
    }
}

impl WithState for StateCell {
    fn serialize(&self) -> SerializedState {
        self.state.get_cloned()
    }

    fn deserialize(&self, state: SerializedState) {
        self.state.set_neq(state);
    }

    fn serialized_signal(&self) -> impl Signal<Item = SerializedState> + 'static {
        self.state.signal_cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use urlsync_shared::state_from_pairs;

    #[test]
    fn fields_are_set_and_removed() {
        let cell = StateCell::default();
        cell.set_field("a", "1");
        cell.set_field("b", "2");
        cell.remove_field("a");
        cell.remove_field("missing");
        assert_eq!(cell.serialize(), state_from_pairs([("b", "2")]));
    }

    #[test]
    fn deserialize_replaces_whole_state() {
        let cell = StateCell::new(state_from_pairs([("a", "1"), ("b", "2")]));
        cell.deserialize(state_from_pairs([("c", "3")]));
        assert_eq!(cell.serialize(), state_from_pairs([("c", "3")]));
    }

    #[tokio::test]
    async fn signal_reports_current_then_changed_snapshot() {
        let cell = StateCell::default();
        let mut snapshots = cell.serialized_signal().to_stream();

        assert_eq!(snapshots.next().await, Some(SerializedState::new()));

        cell.set_field("city", "Oslo");
        assert_eq!(snapshots.next().await, Some(state_from_pairs([("city", "Oslo")])));
    }

    #[tokio::test]
    async fn field_signal_follows_one_key() {
        let cell = StateCell::default();
        let mut city = cell.field_signal("city").to_stream();
        assert_eq!(city.next().await, Some(None));

        cell.set_field("city", "Oslo");
        assert_eq!(city.next().await, Some(Some("Oslo".to_string())));
    }
}
