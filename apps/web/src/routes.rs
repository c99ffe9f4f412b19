use crate::pages::{About, Books, Home};
use crate::views::Frame;
use dioxus::prelude::*;
use shelf_domain::routes::PageId;
use shelf_kernel::routing::RoutingTable;

/// Client-side routes. Paths mirror `shelf_domain::routes::STANDARD_ROUTES`.
#[derive(Clone, Debug, PartialEq, Eq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Frame)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/books")]
        Books {},
}

impl From<PageId> for Route {
    fn from(page: PageId) -> Self {
        match page {
            PageId::Home => Self::Home {},
            PageId::About => Self::About {},
            PageId::Books => Self::Books {},
        }
    }
}

/// The route the router renders for a browser location once the history layer has removed
/// the table's base path.
#[must_use]
pub fn route_at(table: &RoutingTable, location: &str) -> Option<Route> {
    table.strip_base(location)?.parse().ok()
}
