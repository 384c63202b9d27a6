//! Host bridge
//!
//! The surrounding shell owns data fetching and account switching. It drives
//! the dashboard through these `wasm_bindgen` exports. Calls that arrive
//! before the app is mounted are buffered and replayed by [`attach`].

use crate::app::AppState;
use antigravity_types::{Account, ConfigError, TypedError, UiConfig};
use leptos::prelude::*;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

#[derive(Default)]
struct Pending {
    account: Option<Option<Account>>,
    config: Option<UiConfig>,
    language: Option<String>,
}

thread_local! {
    static STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
    static PENDING: RefCell<Pending> = RefCell::new(Pending::default());
    static SWITCH_HANDLER: RefCell<Option<js_sys::Function>> = const { RefCell::new(None) };
}

/// Parse an account payload. `null`, an empty string or whitespace mean
/// "no active account".
pub fn parse_account(json: &str) -> Result<Option<Account>, TypedError> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e).into())
}

fn to_js_error(err: TypedError) -> JsValue {
    log::warn!("Rejected host payload: {err}");
    JsValue::from_str(&err.to_string())
}

fn mounted_state() -> Option<AppState> {
    STATE.with(|s| *s.borrow())
}

/// Set (or clear, with `null`) the active account.
#[wasm_bindgen(js_name = setCurrentAccount)]
pub fn set_current_account(json: &str) -> Result<(), JsValue> {
    let account = parse_account(json).map_err(to_js_error)?;
    match &account {
        Some(a) => log::info!("Active account: {} ({} models)", a.email, a.quota_models().len()),
        None => log::info!("No active account"),
    }

    match mounted_state() {
        Some(state) => state.current_account.set(account),
        None => PENDING.with(|p| p.borrow_mut().account = Some(account)),
    }
    Ok(())
}

/// Register the zero-argument switch handler; `null` removes it and hides
/// the switch control.
#[wasm_bindgen(js_name = setSwitchHandler)]
pub fn set_switch_handler(handler: Option<js_sys::Function>) {
    let available = handler.is_some();
    SWITCH_HANDLER.with(|h| *h.borrow_mut() = handler);
    if let Some(state) = mounted_state() {
        state.switch_available.set(available);
    }
}

/// Replace the UI configuration from a JSON object.
#[wasm_bindgen(js_name = setUiConfig)]
pub fn set_ui_config(json: &str) -> Result<(), JsValue> {
    let config = UiConfig::from_json(json).map_err(|e| to_js_error(e.into()))?;
    match mounted_state() {
        Some(state) => state.config.set(config),
        None => PENDING.with(|p| p.borrow_mut().config = Some(config)),
    }
    Ok(())
}

/// Switch the display language (e.g. "en", "zh-CN").
#[wasm_bindgen(js_name = setLanguage)]
pub fn set_language(code: &str) {
    match mounted_state() {
        Some(state) => state.config.update(|c| c.language = code.to_string()),
        None => PENDING.with(|p| p.borrow_mut().language = Some(code.to_string())),
    }
}

/// Invoke the host's switch handler, if one is registered.
///
/// The handler is cloned out first so it may replace or clear itself.
pub fn notify_switch() {
    let Some(handler) = current_switch_handler() else {
        return;
    };
    if let Err(e) = handler.call0(&JsValue::NULL) {
        log::warn!("Switch handler threw: {:?}", e);
    }
}

fn current_switch_handler() -> Option<js_sys::Function> {
    SWITCH_HANDLER.with(|h| h.borrow().clone())
}

/// Bind the mounted app state and replay buffered host calls.
pub fn attach(state: AppState) {
    STATE.with(|s| *s.borrow_mut() = Some(state));

    let pending = PENDING.with(|p| std::mem::take(&mut *p.borrow_mut()));
    if let Some(config) = pending.config {
        state.config.set(config);
    }
    if let Some(language) = pending.language {
        state.config.update(|c| c.language = language);
    }
    if let Some(account) = pending.account {
        state.current_account.set(account);
    }
    state.switch_available.set(SWITCH_HANDLER.with(|h| h.borrow().is_some()));
}
