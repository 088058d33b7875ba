//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background - for primary actions
    Primary,
    /// Gray background - for secondary actions
    Secondary,
    /// Red background - for failure acknowledgments
    Danger,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-gray-700 hover:bg-gray-600 text-gray-300 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Danger => {
            "bg-red-600 hover:bg-red-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };

    rsx! {
        button {
            class: "inline-flex items-center gap-2 px-4 py-2 rounded-lg transition-colors {variant_class}",
            disabled,
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
