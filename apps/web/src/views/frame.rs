use super::Chrome;
use crate::routes::Route;
use dioxus::prelude::*;
use shelf_kernel::routing::RoutingTable;
use std::sync::Arc;

/// Layout around every page: navigation generated from the shared routing table.
#[component]
pub fn Frame() -> Element {
    let chrome = use_context::<Chrome>();
    let routes = use_context::<Arc<RoutingTable>>();
    let links = routes.entries().iter().map(|entry| (Route::from(entry.page), entry.name));

    let nav = rsx! {
        nav { class: chrome.nav_class(),
            for (route, name) in links {
                Link { key: "{name}", to: route, active_class: "active", "{name}" }
            }
        }
    };

    match chrome {
        Chrome::TopBar => rsx! {
            header { {nav} }
            main { Outlet::<Route> {} }
        },
        Chrome::TabBar => rsx! {
            main { Outlet::<Route> {} }
            footer { {nav} }
        },
    }
}
