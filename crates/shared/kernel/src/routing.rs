//! Static routing table shared with the mounted application.
//!
//! The table is validated once on construction and never mutated afterwards; hosts hold it
//! behind an `Arc`. Lookups understand the history base path the same way an HTML5 history
//! router does: `"/shelf/books?page=2"` under base `"/shelf/"` resolves to `/books`.

use crate::error::RoutingError;
use shelf_domain::routes::{RouteEntry, STANDARD_ROUTES};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    /// Normalized base: empty for the root, otherwise `/prefix` without a trailing slash.
    base: String,
    entries: Vec<RouteEntry>,
}

impl RoutingTable {
    /// Builds a table, enforcing unique paths, unique names and absolute paths.
    ///
    /// # Errors
    /// Returns the first [`RoutingError`] found, in entry order.
    pub fn new(
        base_path: &str,
        entries: impl IntoIterator<Item = RouteEntry>,
    ) -> Result<Self, RoutingError> {
        let entries: Vec<RouteEntry> = entries.into_iter().collect();

        let mut paths = HashSet::with_capacity(entries.len());
        let mut names = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !entry.path.starts_with('/') || entry.path.contains(['?', '#']) {
                return Err(RoutingError::InvalidPath { path: entry.path.into(), context: None });
            }
            if !paths.insert(entry.path) {
                return Err(RoutingError::DuplicatePath { path: entry.path.into(), context: None });
            }
            if !names.insert(entry.name) {
                return Err(RoutingError::DuplicateName { name: entry.name.into(), context: None });
            }
        }

        let base = normalize_base(base_path);
        debug!(base = %base, routes = entries.len(), "Routing table built");

        Ok(Self { base, entries })
    }

    /// The three routes the application ships with.
    ///
    /// # Errors
    /// Only if the built-in table itself is malformed.
    pub fn standard(base_path: &str) -> Result<Self, RoutingError> {
        Self::new(base_path, STANDARD_ROUTES.iter().cloned())
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        if self.base.is_empty() { "/" } else { &self.base }
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    #[must_use]
    pub fn by_path(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Absolute href of a named route, base path included.
    #[must_use]
    pub fn href(&self, name: &str) -> Option<String> {
        self.by_name(name).map(|entry| format!("{}{}", self.base, entry.path))
    }

    /// Prefix an HTML5 history router must strip, `None` when serving from the root.
    #[must_use]
    pub fn history_prefix(&self) -> Option<&str> {
        (!self.base.is_empty()).then_some(self.base.as_str())
    }

    /// The router-relative path of a browser location: query, fragment, base path and
    /// trailing slashes removed. Locations outside the base path yield `None`.
    #[must_use]
    pub fn strip_base<'a>(&self, location: &'a str) -> Option<&'a str> {
        let path = location.split(['?', '#']).next().unwrap_or_default();

        let relative = if self.base.is_empty() {
            path
        } else {
            let rest = path.strip_prefix(self.base.as_str())?;
            if !rest.is_empty() && !rest.starts_with('/') {
                return None;
            }
            rest
        };

        let trimmed = relative.trim_end_matches('/');
        Some(if trimmed.is_empty() { "/" } else { trimmed })
    }

    /// Maps a browser location (path, optional query and fragment) to its route.
    ///
    /// Locations outside the base path resolve to `None`.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Option<&RouteEntry> {
        self.by_path(self.strip_base(location)?)
    }
}

fn normalize_base(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() { String::new() } else { format!("/{trimmed}") }
}
