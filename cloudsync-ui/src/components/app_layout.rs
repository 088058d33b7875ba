//! App layout view component
//!
//! Static chrome: brand sidebar with navigation labels and a header bar,
//! wrapping arbitrary children in a scrollable content region.

use dioxus::prelude::*;

/// Navigation entry in the sidebar. The labels carry no click behavior;
/// at most one entry is marked active.
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub is_active: bool,
}

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(nav_items: Vec<NavItem>, children: Element) -> Element {
    rsx! {
        div { class: "h-screen flex bg-gray-900 text-gray-100",
            aside { class: "w-56 shrink-0 bg-gray-950 border-r border-white/5 flex flex-col",
                div { class: "h-14 flex items-center px-5 border-b border-white/5",
                    h2 { class: "text-lg font-bold text-white", "CloudSync" }
                }
                nav { class: "flex-1 py-4",
                    ul { class: "space-y-1 px-3",
                        for item in nav_items.iter() {
                            li {
                                key: "{item.label}",
                                class: if item.is_active {
                                    "px-3 py-2 rounded-lg bg-indigo-600/20 text-indigo-300 text-sm font-medium"
                                } else {
                                    "px-3 py-2 rounded-lg text-gray-400 text-sm"
                                },
                                "{item.label}"
                            }
                        }
                    }
                }
            }
            div { class: "flex-1 flex flex-col min-w-0",
                header { class: "h-14 shrink-0 bg-gray-950/60 border-b border-white/5 flex items-center justify-between px-6",
                    h1 { class: "text-xl font-semibold text-white", "Image Import" }
                    span { class: "text-sm font-medium text-gray-300", "Admin User" }
                }
                div { class: "flex-1 overflow-y-auto",
                    div { class: "container mx-auto p-6 space-y-6", {children} }
                }
            }
        }
    }
}
