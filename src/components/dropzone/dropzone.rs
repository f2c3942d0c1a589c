//! Drop-zone component.
//!
//! Click the zone to open the file dialog, or drop files onto it. Either way
//! the hidden picker ends up holding the selection and the preview list below
//! the zone is rebuilt from it.

use leptos::{ev, html, prelude::*};
use leptos_icons::Icon;
use recon_upload_core::{Affordance, DropOutcome, FilePicker, SelectionPreviewController};

use super::picker::{InputPicker, NativeFiles, SignalSurface};
use super::PreviewList;
use crate::components::icons as ic;
use crate::config::{dropzone, form};
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/dropzone/dropzone.module.css");

/// Border and background colour for an affordance state.
pub fn affordance_colors(affordance: Affordance) -> (&'static str, &'static str) {
    match affordance {
        Affordance::Resting => (dropzone::RESTING_BORDER, dropzone::RESTING_BACKGROUND),
        Affordance::Active => (dropzone::ACTIVE_BORDER, dropzone::ACTIVE_BACKGROUND),
    }
}

/// Drop-zone with its hidden file picker and preview list.
///
/// The controller lives as long as this component; nothing outlives it.
#[component]
pub fn DropZone() -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let surface = SignalSurface::new();
    let controller = SelectionPreviewController::new(InputPicker::new(input_ref), surface);

    let handle_click = move |_: ev::MouseEvent| {
        controller.activate_click_relay();
    };

    let handle_change = move |_: ev::Event| {
        let selection = controller.picker().held();
        log::debug(&format!("picker selected {} file(s)", selection.len()));
        controller.on_picker_change(&selection);
    };

    let handle_dragover = move |ev: ev::DragEvent| {
        ev.prevent_default();
        controller.on_drag_over();
    };

    let handle_dragleave = move |_: ev::DragEvent| {
        controller.on_drag_leave();
    };

    let handle_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(NativeFiles);

        match controller.on_drop(files.as_ref()) {
            DropOutcome::Accepted(count) => log::debug(&format!("dropped {} file(s)", count)),
            DropOutcome::Ignored => log::debug("drop without files ignored"),
        }
    };

    let border_color = move || affordance_colors(surface.affordance.get()).0;
    let background_color = move || affordance_colors(surface.affordance.get()).1;

    view! {
        <div>
            <div
                class=css::zone
                style:border-color=border_color
                style:background-color=background_color
                on:click=handle_click
                on:dragover=handle_dragover
                on:dragleave=handle_dragleave
                on:drop=handle_drop
            >
                <span class=css::icon aria-hidden="true"><Icon icon=ic::UPLOAD /></span>
                <span class=css::prompt>{dropzone::PROMPT}</span>
            </div>
            // Kept outside the zone so its own click does not bubble back into the relay
            <input
                node_ref=input_ref
                type="file"
                name=form::FIELD_NAME
                multiple=true
                hidden=true
                on:change=handle_change
            />
            <PreviewList rows=surface.rows />
        </div>
    }
}
