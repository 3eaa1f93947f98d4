//! URL ⇄ state synchronizer core
//!
//! Holds the two reentrancy flags and the decisions for both directions.
//! Event wiring (popstate listener, debounced signal) lives in
//! [`crate::install`]; everything here is synchronous and runs against
//! any [`History`].

use crate::history::{History, HistoryError};
use crate::state::WithState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use urlsync_shared::{SerializedState, SyncConfig, UrlUpdate, extract_state, plan_url_update};

/// Result of handling one state snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// URL updates were disabled, or the snapshot echoed a restore from the URL
    Suppressed,
    /// The URL already reflects the snapshot
    Unchanged,
    Applied(UrlUpdate),
}

/// Lowers a flag for the lifetime of the guard; raised again on drop.
struct FlagGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> FlagGuard<'a> {
    fn lower(flag: &'a Cell<bool>) -> Self {
        flag.set(false);
        Self { flag }
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(true);
    }
}

/// Bidirectional sync between a [`WithState`] entity and a [`History`].
pub struct UrlStateSync<S, H> {
    target: S,
    history: H,
    config: Rc<SyncConfig>,
    url_updates_enabled: Rc<Cell<bool>>,
    pop_state_enabled: Rc<Cell<bool>>,
    restored_echo: Rc<RefCell<Option<SerializedState>>>,
}

impl<S: Clone, H: Clone> Clone for UrlStateSync<S, H> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            history: self.history.clone(),
            config: self.config.clone(),
            url_updates_enabled: self.url_updates_enabled.clone(),
            pop_state_enabled: self.pop_state_enabled.clone(),
            restored_echo: self.restored_echo.clone(),
        }
    }
}

impl<S, H> UrlStateSync<S, H>
where
    S: WithState,
    H: History,
{
    pub fn new(target: S, history: H, config: SyncConfig) -> Self {
        Self {
            target,
            history,
            config: Rc::new(config),
            url_updates_enabled: Rc::new(Cell::new(true)),
            pop_state_enabled: Rc::new(Cell::new(true)),
            restored_echo: Rc::new(RefCell::new(None)),
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn target(&self) -> &S {
        &self.target
    }

    /// State currently encoded in the URL, including the path-derived mode.
    pub fn state_from_location(&self) -> Result<SerializedState, HistoryError> {
        Ok(extract_state(&self.history.href()?, &self.config))
    }

    /// Restores the entity from the URL (page load and navigation).
    ///
    /// URL updates are disabled while the entity is being restored. Returns
    /// the restored state, or `None` when the URL carries no state.
    pub fn apply_state_from_location(&self) -> Result<Option<SerializedState>, HistoryError> {
        let _guard = FlagGuard::lower(&self.url_updates_enabled);

        let state = self.state_from_location()?;
        if state.is_empty() {
            return Ok(None);
        }

        self.target.deserialize(state.clone());
        *self.restored_echo.borrow_mut() = Some(self.target.serialize());
        Ok(Some(state))
    }

    /// Page-load restore.
    ///
    /// The resulting snapshot becomes the observer's baseline, so no echo is
    /// kept for it.
    pub fn apply_initial_state(&self) -> Result<Option<SerializedState>, HistoryError> {
        let restored = self.apply_state_from_location();
        self.restored_echo.borrow_mut().take();
        restored
    }

    /// Writes a new snapshot into the URL.
    pub fn on_state_changed(
        &self,
        new_state: &SerializedState,
    ) -> Result<SyncOutcome, HistoryError> {
        if !self.url_updates_enabled.get() {
            return Ok(SyncOutcome::Suppressed);
        }
        let echo = self.restored_echo.borrow_mut().take();
        if echo.as_ref() == Some(new_state) {
            return Ok(SyncOutcome::Suppressed);
        }

        let href = self.history.href()?;
        let Some(update) = plan_url_update(&href, new_state, &self.config) else {
            return Ok(SyncOutcome::Unchanged);
        };

        let _guard = FlagGuard::lower(&self.pop_state_enabled);
        self.history.apply(&update)?;
        Ok(SyncOutcome::Applied(update))
    }

    /// Handles browser navigation; ignored while the synchronizer itself is
    /// mutating history.
    pub fn on_pop_state(&self) -> Result<Option<SerializedState>, HistoryError> {
        if !self.pop_state_enabled.get() {
            return Ok(None);
        }
        self.apply_state_from_location()
    }
}
