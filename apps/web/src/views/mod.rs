//! Root views and the layout they share.
//!
//! Each root view picks a [`Chrome`] and renders the same router; the [`Frame`] layout reads
//! the chrome to place the navigation.

mod desktop;
mod frame;
mod mobile;

pub use desktop::DesktopApp;
pub use frame::Frame;
pub use mobile::MobileApp;

/// Navigation placement chosen by the root view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    /// Horizontal bar above the page.
    TopBar,
    /// Tab bar pinned below the page.
    TabBar,
}

impl Chrome {
    #[must_use]
    pub const fn nav_class(self) -> &'static str {
        match self {
            Self::TopBar => "nav nav--top",
            Self::TabBar => "nav nav--tabs",
        }
    }
}
