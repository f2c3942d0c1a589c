//! Preview list of the selected files.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;
use recon_upload_core::PreviewRow;

use crate::components::icons as ic;
use crate::config::dropzone::SPREADSHEET_EXTENSIONS;

stylance::import_crate_style!(css, "src/components/dropzone/preview_list.module.css");

fn row_icon(row: &PreviewRow) -> IconData {
    if SPREADSHEET_EXTENSIONS.contains(&row.extension.as_str()) {
        ic::FILE_SPREADSHEET
    } else {
        ic::FILE
    }
}

/// One `<li>` per row.
///
/// The whole list is rebuilt whenever `rows` changes; rows are not keyed.
/// Names go into text nodes, so markup in a file name is shown literally.
#[component]
pub fn PreviewList(#[prop(into)] rows: Signal<Vec<PreviewRow>>) -> impl IntoView {
    view! {
        <ul class=css::list aria-label="Selected files">
            {move || {
                rows.get()
                    .into_iter()
                    .map(|row| view! { <PreviewItem row=row /> })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn PreviewItem(row: PreviewRow) -> impl IntoView {
    let icon = row_icon(&row);
    let text = row.text();

    view! {
        <li class=css::row>
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::slot>{row.slot.label()}</span>
            <span class=css::text>{text}</span>
        </li>
    }
}
