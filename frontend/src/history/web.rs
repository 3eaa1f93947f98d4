//! Browser implementation using `window.location` and `window.history`.

use super::{History, HistoryError};
use wasm_bindgen::JsValue;

/// The page's real address bar
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

fn window() -> Result<web_sys::Window, HistoryError> {
    web_sys::window().ok_or(HistoryError::Unavailable)
}

fn browser_history() -> Result<web_sys::History, HistoryError> {
    window()?.history().map_err(js_error)
}

pub(crate) fn js_error(value: JsValue) -> HistoryError {
    HistoryError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl History for BrowserHistory {
    fn href(&self) -> Result<String, HistoryError> {
        window()?.location().href().map_err(js_error)
    }

    fn push(&self, url: &str) -> Result<(), HistoryError> {
        browser_history()?
            .push_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(js_error)
    }

    fn replace(&self, url: &str) -> Result<(), HistoryError> {
        browser_history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(js_error)
    }
}
