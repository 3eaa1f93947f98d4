//! Wiring the synchronizer into the page: popstate listener, debounced state
//! subscription and the initial restore from the URL.

use crate::debounce::debounce;
use crate::history::web::js_error;
use crate::history::{BrowserHistory, History, HistoryError};
use crate::state::WithState;
use crate::sync::{SyncOutcome, UrlStateSync};
use futures::{StreamExt, future};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use urlsync_shared::{SerializedState, SyncConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use zoon::{SignalExt, Task, TaskHandle};

/// Keeps the sync alive; dropping it detaches the popstate listener and
/// stops observing the state.
pub struct UrlSyncHandle {
    window: web_sys::Window,
    pop_state_listener: Closure<dyn FnMut(web_sys::Event)>,
    _state_task: TaskHandle,
}

impl Drop for UrlSyncHandle {
    fn drop(&mut self) {
        if let Err(error) = self.window.remove_event_listener_with_callback(
            "popstate",
            self.pop_state_listener.as_ref().unchecked_ref(),
        ) {
            zoon::eprintln!("⚠️ Failed to detach URL sync popstate listener: {}", js_error(error));
        }
    }
}

/// Installs URL sync for `target` with the default configuration.
pub fn setup_browser_history<S>(target: S) -> Result<UrlSyncHandle, HistoryError>
where
    S: WithState + Clone + 'static,
{
    setup_browser_history_with(target, SyncConfig::default())
}

/// Installs URL sync for `target`.
///
/// State snapshots are written to the URL after `config.debounce_ms` of
/// quiet; back/forward navigation restores the state from the URL. The
/// state in the current URL is applied once before returning.
pub fn setup_browser_history_with<S>(
    target: S,
    config: SyncConfig,
) -> Result<UrlSyncHandle, HistoryError>
where
    S: WithState + Clone + 'static,
{
    let window = web_sys::window().ok_or(HistoryError::Unavailable)?;
    let sync = UrlStateSync::new(target, BrowserHistory, config);

    let pop_state_listener = Closure::wrap(Box::new({
        let sync = sync.clone();
        move |_event: web_sys::Event| {
            report_restore("navigation", sync.on_pop_state());
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    window
        .add_event_listener_with_callback("popstate", pop_state_listener.as_ref().unchecked_ref())
        .map_err(js_error)?;

    report_restore("page load", sync.apply_initial_state());

    let debounce_ms = sync.config().debounce_ms;
    let state_task = Task::start_droppable(state_change_task(
        sync,
        move || TimeoutFuture::new(debounce_ms),
        report_update,
    ));

    Ok(UrlSyncHandle {
        window,
        pop_state_listener,
        _state_task: state_task,
    })
}

/// Forwards debounced snapshot changes of the synced entity into `sync`.
///
/// The snapshot at call time is the baseline already reflected in the URL.
/// The first emission is dropped only while it still equals that baseline,
/// so a change made before the future is first polled is not lost.
pub fn state_change_task<S, H, F, Fut, R>(
    sync: UrlStateSync<S, H>,
    sleep: F,
    mut report: R,
) -> impl Future<Output = ()> + 'static
where
    S: WithState + 'static,
    H: History + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
    R: FnMut(Result<SyncOutcome, HistoryError>) + 'static,
{
    let mut baseline = Some(sync.target().serialize());
    let changes = sync
        .target()
        .serialized_signal()
        .to_stream()
        .filter(move |snapshot| {
            let unchanged = baseline.take().is_some_and(|baseline| baseline == *snapshot);
            future::ready(!unchanged)
        })
        .boxed_local();

    debounce(changes, sleep).for_each(move |snapshot| {
        report(sync.on_state_changed(&snapshot));
        future::ready(())
    })
}

fn report_restore(trigger: &str, result: Result<Option<SerializedState>, HistoryError>) {
    match result {
        Ok(Some(state)) => zoon::println!("🔗 URL state restored on {}: {:?}", trigger, state),
        Ok(None) => {}
        Err(error) => zoon::eprintln!("⚠️ Failed to restore URL state on {}: {}", trigger, error),
    }
}

fn report_update(result: Result<SyncOutcome, HistoryError>) {
    match result {
        Ok(SyncOutcome::Applied(update)) => {
            zoon::println!("🔗 URL updated ({:?}): {}", update.action, update.url)
        }
        Ok(SyncOutcome::Unchanged | SyncOutcome::Suppressed) => {}
        Err(error) => zoon::eprintln!("⚠️ Failed to update URL: {}", error),
    }
}
