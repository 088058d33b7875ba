//! Reusable text input component

use dioxus::prelude::*;

/// Reusable text input component with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
) -> Element {
    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        input {
            r#type: "text",
            class: "w-full bg-gray-800/50 rounded-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-300 placeholder-gray-500 {disabled_class}",
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
