//! Root application module.
//!
//! Contains the [`App`] component and [`mount`], which attaches it to the
//! page once at startup.

use leptos::prelude::*;

use crate::components::DropZone;
use crate::config::{MOUNT_ELEMENT_ID, PAGE_TITLE, form};
use crate::error::MountError;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

/// Upload page: heading, drop-zone and submit button inside a multipart form.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class=css::page>
            <h1 class=css::title>{PAGE_TITLE}</h1>
            <form
                class=css::form
                action=form::ACTION
                method=form::METHOD
                enctype=form::ENCTYPE
            >
                <DropZone />
                <button type="submit" class=css::submit>{form::SUBMIT_LABEL}</button>
            </form>
        </main>
    }
}

/// Mount [`App`] into the `#app` element for the rest of the page session.
pub fn mount() -> Result<(), MountError> {
    let root = dom::html_element_by_id(MOUNT_ELEMENT_ID)?;
    mount_to(root, App).forget();
    Ok(())
}
