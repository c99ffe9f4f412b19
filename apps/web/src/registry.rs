use crate::views::{DesktopApp, MobileApp};
use dioxus::prelude::Element;
use shelf_domain::device::RootViewId;
use shelf_kernel::bootstrap::ViewResolver;
use shelf_kernel::error::BootstrapError;
use std::future::ready;
use tracing::debug;

/// A root view: the component handed to the Dioxus launcher.
pub type RootComponent = fn() -> Element;

/// Root views available to the bootstrap sequencer, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: Vec<(RootViewId, RootComponent)>,
}

impl ViewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The desktop and mobile root views compiled into this binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new()
            .register(RootViewId::Desktop, DesktopApp)
            .register(RootViewId::Mobile, MobileApp)
    }

    /// Adds or replaces the view registered under `id`.
    #[must_use]
    pub fn register(mut self, id: RootViewId, view: RootComponent) -> Self {
        self.views.retain(|(existing, _)| *existing != id);
        self.views.push((id, view));
        self
    }

    #[must_use]
    pub fn contains(&self, id: RootViewId) -> bool {
        self.views.iter().any(|(existing, _)| *existing == id)
    }
}

impl ViewResolver for ViewRegistry {
    type View = RootComponent;

    fn resolve(
        &self,
        id: RootViewId,
    ) -> impl Future<Output = Result<RootComponent, BootstrapError>> {
        debug!(%id, registered = self.views.len(), "Looking up root view");
        ready(
            self.views
                .iter()
                .find(|(existing, _)| *existing == id)
                .map(|(_, view)| *view)
                .ok_or_else(|| BootstrapError::view_resolution(id, "no view registered")),
        )
    }
}
