//! Import notice dialog component
//!
//! Blocking modal shown after an import submission resolves. Dismissal
//! only clears the notice; it never retries anything.

use crate::components::{Button, ButtonVariant};
use crate::stores::ImportNotice;
use dioxus::prelude::*;

/// Modal dialog for import outcomes
#[component]
pub fn ImportDialog(notice: ImportNotice, on_dismiss: EventHandler<()>) -> Element {
    let variant = if notice.is_failure() {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };
    let title = notice.title();
    let message = notice.message().to_string();

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            onclick: move |_| on_dismiss.call(()),

            div {
                class: "bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-xl font-bold text-white mb-4", "{title}" }
                p { class: "text-gray-300 mb-6", "{message}" }

                div { class: "flex justify-end",
                    Button {
                        variant,
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
