//! Gallery view component - pure rendering, no data fetching
//!
//! Filtering is server-delegated: changing the select only reports the new
//! filter upward, the controller re-reads the listing.

use crate::components::image_card::ImageCard;
use crate::display_types::ImageSource;
use crate::stores::GalleryState;
use dioxus::prelude::*;

/// Gallery view: image count, source filter, and a card grid
#[component]
pub fn GalleryView(
    state: GalleryState,
    on_filter_change: EventHandler<Option<ImageSource>>,
) -> Element {
    let count = state.images.len();
    let filter_value = state.filter.map(ImageSource::as_tag).unwrap_or("");

    rsx! {
        section { class: "space-y-4",
            div { class: "bg-gray-800 rounded-lg px-6 py-4 flex items-center justify-between",
                h3 { class: "text-lg font-semibold text-white", "Imported Gallery ({count})" }
                select {
                    class: "bg-gray-900 text-sm text-gray-300 rounded-lg px-3 py-1.5 border border-gray-600 hover:border-gray-500 focus:outline-none",
                    value: "{filter_value}",
                    onchange: move |e| on_filter_change.call(ImageSource::from_tag(&e.value())),
                    option { value: "", "All Sources" }
                    option { value: "google_drive", "Google Drive" }
                    option { value: "dropbox", "Dropbox" }
                }
            }
            if state.images.is_empty() {
                div { class: "text-center py-12 text-gray-500",
                    "No images found. Start an import to see files here."
                }
            } else {
                div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
                    for image in state.images.iter() {
                        ImageCard { key: "{image.id}", image: image.clone() }
                    }
                }
            }
        }
    }
}
