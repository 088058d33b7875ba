//! Importer panel component - pure view with callbacks

use crate::components::{Button, ButtonVariant, TextInput};
use crate::display_types::ImageSource;
use crate::stores::ImporterState;
use dioxus::prelude::*;

/// Importer panel: folder URL input plus one import button per provider.
///
/// The input forwards values verbatim; both buttons are disabled while an
/// import submission is in flight.
#[component]
pub fn ImporterView(
    state: ImporterState,
    on_folder_url_change: EventHandler<String>,
    on_import: EventHandler<ImageSource>,
) -> Element {
    let importing = state.importing;

    rsx! {
        div { class: "bg-gray-800 rounded-lg p-6",
            h3 { class: "text-lg font-semibold text-white mb-4", "Import Images" }
            div { class: "mb-4",
                TextInput {
                    value: state.folder_url,
                    on_input: move |value| on_folder_url_change.call(value),
                    placeholder: "Enter folder URL from external source",
                }
            }
            div { class: "flex gap-3",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: importing,
                    onclick: move |_| on_import.call(ImageSource::GoogleDrive),
                    if importing {
                        "Processing..."
                    } else {
                        "Import from Google Drive"
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: importing,
                    onclick: move |_| on_import.call(ImageSource::Dropbox),
                    "Import from Dropbox"
                }
            }
        }
    }
}
