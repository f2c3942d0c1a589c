//! Console logging.
//!
//! Thin wrappers over `web_sys::console` that prefix every message with the
//! application name.

use crate::config::APP_NAME;

fn tagged(msg: &str) -> wasm_bindgen::JsValue {
    format!("[{}] {}", APP_NAME, msg).into()
}

pub fn debug(msg: &str) {
    web_sys::console::debug_1(&tagged(msg));
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&tagged(msg));
}

pub fn error(msg: &str) {
    web_sys::console::error_1(&tagged(msg));
}
