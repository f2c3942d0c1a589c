//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::MountError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Look up an element by id as an [`HtmlElement`].
pub fn html_element_by_id(id: &str) -> Result<HtmlElement, MountError> {
    let document = window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?;

    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| MountError::ElementNotFound(id.to_string()))
}
