use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

/// Page collaborators known to the router.
///
/// A closed set: every route entry points at one of these, so a table built from them can
/// never reference a missing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize)]
pub enum PageId {
    Home,
    About,
    Books,
}

/// A single `(path, name, page)` triple of the routing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub page: PageId,
}

impl RouteEntry {
    #[must_use]
    pub const fn new(path: &'static str, name: &'static str, page: PageId) -> Self {
        Self { path, name, page }
    }
}

/// The routes the application ships with, in navigation order.
pub const STANDARD_ROUTES: &[RouteEntry] = &[
    RouteEntry::new("/", "Home", PageId::Home),
    RouteEntry::new("/about", "About", PageId::About),
    RouteEntry::new("/books", "Books", PageId::Books),
];
