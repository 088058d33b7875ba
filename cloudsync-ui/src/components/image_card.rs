//! Image card component

use crate::components::utils::format_size_kb;
use crate::display_types::ImageRecord;
use dioxus::prelude::*;

/// Single gallery card: preview, name, and size in kilobytes
#[component]
pub fn ImageCard(image: ImageRecord) -> Element {
    let size_label = format_size_kb(image.size);

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300",
            "data-testid": "image-card",
            div { class: "aspect-square bg-gray-700",
                img {
                    src: "{image.storage_path}",
                    alt: "{image.name}",
                    class: "w-full h-full object-cover",
                }
            }
            div { class: "p-3",
                p {
                    class: "text-sm text-gray-200 truncate",
                    title: "{image.name}",
                    "{image.name}"
                }
                div { class: "text-xs text-gray-500 mt-1",
                    span { "{size_label}" }
                }
            }
        }
    }
}
