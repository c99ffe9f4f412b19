//! # Bootstrap
//!
//! One-shot startup pipeline: classify the device, select the root view, resolve it
//! asynchronously, then mount a single [`Application`] carrying the shared routing table.
//!
//! Resolution is the only suspension point. There is no retry and no fallback: when the
//! resolver fails the error is handed back to the entry point untouched and the host is never
//! asked to mount anything.
//!
//! [`Bootstrap::run`] consumes the sequencer, so each sequencer moves from unloaded to either
//! mounted or failed exactly once.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shelf_kernel::bootstrap::{Application, Bootstrap, MountHost, ViewResolver};
//! use shelf_kernel::domain::device::RootViewId;
//! use shelf_kernel::error::BootstrapError;
//! use shelf_kernel::routing::RoutingTable;
//!
//! struct Names;
//!
//! impl ViewResolver for Names {
//!     type View = &'static str;
//!
//!     async fn resolve(&self, id: RootViewId) -> Result<Self::View, BootstrapError> {
//!         Ok(match id {
//!             RootViewId::Desktop => "desktop",
//!             RootViewId::Mobile => "mobile",
//!         })
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Recorder(Vec<&'static str>);
//!
//! impl MountHost<&'static str> for Recorder {
//!     type Handle = ();
//!
//!     fn mount(&mut self, app: Application<&'static str>, _: &str) -> Result<(), BootstrapError> {
//!         self.0.push(*app.view());
//!         Ok(())
//!     }
//! }
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let routes = Arc::new(RoutingTable::standard("/").unwrap());
//! let mounted = Bootstrap::new(Names, Recorder::default(), routes)
//!     .run(Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)"))
//!     .await
//!     .unwrap();
//! assert_eq!(mounted.view, RootViewId::Mobile);
//! # });
//! ```

use crate::device::{matched_token, resolve_device};
use crate::error::BootstrapError;
use crate::routing::RoutingTable;
use shelf_domain::device::{DeviceClass, DevicePreference, RootViewId};
use std::sync::Arc;
use tracing::{debug, error, info};

const DEFAULT_MOUNT_ID: &str = "app";

/// Deferred factory for root views.
pub trait ViewResolver {
    type View;

    /// Produces the view for `id`. Implementations fail with
    /// [`BootstrapError::ViewResolution`].
    fn resolve(&self, id: RootViewId) -> impl Future<Output = Result<Self::View, BootstrapError>>;
}

/// Place the application gets attached to.
pub trait MountHost<V> {
    type Handle;

    fn mount(
        &mut self,
        app: Application<V>,
        mount_id: &str,
    ) -> Result<Self::Handle, BootstrapError>;
}

/// The single application instance: a resolved root view plus the routing table it serves.
#[derive(Debug)]
pub struct Application<V> {
    view: V,
    device: DeviceClass,
    routes: Arc<RoutingTable>,
}

impl<V> Application<V> {
    pub const fn new(view: V, device: DeviceClass, routes: Arc<RoutingTable>) -> Self {
        Self { view, device, routes }
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn device(&self) -> DeviceClass {
        self.device
    }

    pub const fn routes(&self) -> &Arc<RoutingTable> {
        &self.routes
    }

    pub fn into_parts(self) -> (V, DeviceClass, Arc<RoutingTable>) {
        (self.view, self.device, self.routes)
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Mounted<H> {
    pub handle: H,
    pub device: DeviceClass,
    pub view: RootViewId,
}

/// The startup sequencer. Owned by the process entry point and consumed by [`Self::run`].
#[derive(Debug)]
pub struct Bootstrap<R, H> {
    resolver: R,
    host: H,
    routes: Arc<RoutingTable>,
    mount_id: String,
    preference: DevicePreference,
}

impl<R, H> Bootstrap<R, H>
where
    R: ViewResolver,
    H: MountHost<R::View>,
{
    pub fn new(resolver: R, host: H, routes: Arc<RoutingTable>) -> Self {
        Self {
            resolver,
            host,
            routes,
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
            preference: DevicePreference::Auto,
        }
    }

    /// Overrides the id of the host element (default `app`).
    #[must_use = "The sequencer must be run to mount the application"]
    pub fn mount_at(mut self, mount_id: impl Into<String>) -> Self {
        self.mount_id = mount_id.into();
        self
    }

    /// Pins the device class instead of detecting it.
    #[must_use = "The sequencer must be run to mount the application"]
    pub const fn preference(mut self, preference: DevicePreference) -> Self {
        self.preference = preference;
        self
    }

    /// Runs the pipeline once: classify, select, resolve, mount.
    ///
    /// # Errors
    /// Propagates the resolver's [`BootstrapError::ViewResolution`] without mounting, or the
    /// host's [`BootstrapError::Mount`].
    #[allow(clippy::future_not_send)]
    pub async fn run(
        mut self,
        identity: Option<&str>,
    ) -> Result<Mounted<H::Handle>, BootstrapError> {
        let device = resolve_device(self.preference, identity);
        debug!(
            %device,
            preference = %self.preference,
            token = identity.and_then(matched_token),
            "Device classified"
        );

        let view = RootViewId::from(device);
        info!(%view, "Resolving root view");

        let root = self.resolver.resolve(view).await.inspect_err(|e| {
            error!(%view, error = %e, "Root view resolution failed");
        })?;

        let app = Application::new(root, device, Arc::clone(&self.routes));
        let handle = self.host.mount(app, &self.mount_id)?;
        info!(mount_id = %self.mount_id, routes = self.routes.len(), "Application mounted");

        Ok(Mounted { handle, device, view })
    }
}
