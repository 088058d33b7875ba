use crate::Route;
use cloudsync_ui::{AppLayoutView, NavItem};
use dioxus::prelude::*;

/// Application chrome around the routed content.
///
/// Only Dashboard exists as a screen; the remaining entries are static
/// labels without navigation.
#[component]
pub fn AppShell() -> Element {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            is_active: true,
        },
        NavItem {
            label: "Files",
            is_active: false,
        },
        NavItem {
            label: "Integrations",
            is_active: false,
        },
        NavItem {
            label: "Settings",
            is_active: false,
        },
    ];

    rsx! {
        AppLayoutView { nav_items, Outlet::<Route> {} }
    }
}
