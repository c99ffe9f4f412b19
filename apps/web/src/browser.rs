//! Browser side of startup: reads the user agent, mounts into the DOM with history routing
//! under the configured base path, reports failures as an unhandled promise rejection.

use crate::registry::{RootComponent, ViewRegistry};
use crate::routes::route_at;
use crate::settings;
use anyhow::Context;
use dioxus::prelude::*;
use dioxus::web::WebHistory;
use shelf_domain::config::AppConfig;
use shelf_kernel::bootstrap::{Application, Bootstrap, MountHost};
use shelf_kernel::error::BootstrapError;
use shelf_kernel::routing::RoutingTable;
use shelf_logger::{Logger, LoggerError, parse_level};
use std::rc::Rc;
use std::sync::Arc;
use tracing::{error, info, warn};
use wasm_bindgen::{JsError, JsValue};

/// Mounts the application into a DOM element, at most once.
#[derive(Debug, Default)]
pub(crate) struct DomHost {
    mounted: bool,
}

impl MountHost<RootComponent> for DomHost {
    type Handle = ();

    fn mount(
        &mut self,
        app: Application<RootComponent>,
        mount_id: &str,
    ) -> Result<Self::Handle, BootstrapError> {
        if self.mounted {
            return Err(BootstrapError::mount(
                mount_id.to_owned(),
                "an application is already mounted",
            ));
        }

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| BootstrapError::mount(mount_id.to_owned(), "no document available"))?;
        if document.get_element_by_id(mount_id).is_none() {
            return Err(BootstrapError::mount(mount_id.to_owned(), "element not found"));
        }

        let (root, device, routes) = app.into_parts();
        log_initial_route(&routes);

        let history = WebHistory::new(routes.history_prefix().map(str::to_owned), true);
        let cfg = dioxus::web::Config::new().rootname(mount_id).history(Rc::new(history));
        LaunchBuilder::web()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(Arc::clone(&routes)))
            .with_context_provider(move || Box::new(device))
            .launch(root);

        self.mounted = true;
        Ok(())
    }
}

fn user_agent() -> Option<String> {
    web_sys::window()?.navigator().user_agent().ok()
}

fn log_initial_route(routes: &RoutingTable) {
    let Some(path) = web_sys::window().and_then(|window| window.location().pathname().ok())
    else {
        return;
    };
    match route_at(routes, &path) {
        Some(route) => info!(%route, %path, "Initial route"),
        None => warn!(%path, base = routes.base_path(), "Initial location matches no route"),
    }
}

fn init_logging(config: &AppConfig) -> Result<Logger, LoggerError> {
    let builder = Logger::builder()
        .name(config.app.name.clone())
        .level(parse_level(&config.logging.level)?);
    match &config.logging.filter {
        Some(filter) => builder.env_filter(filter.clone()).init(),
        None => builder.init(),
    }
}

async fn boot(config: AppConfig) -> anyhow::Result<()> {
    let routes = RoutingTable::standard(&config.app.base_path).context("Invalid routing table")?;

    let mounted = Bootstrap::new(ViewRegistry::bundled(), DomHost::default(), Arc::new(routes))
        .mount_at(config.app.mount_id.clone())
        .preference(config.app.device)
        .run(user_agent().as_deref())
        .await?;

    info!(device = %mounted.device, view = %mounted.view, "Startup complete");
    Ok(())
}

/// Process entry point: loads settings, starts logging and runs the bootstrap sequencer once.
///
/// A startup failure rejects the boot promise, which nothing awaits, so it surfaces on the
/// page's `unhandledrejection` channel.
pub fn start() {
    console_error_panic_hook::set_once();

    let config = match settings::load() {
        Ok(config) => config,
        Err(err) => wasm_bindgen::throw_str(&err.to_string()),
    };

    let _logger = match init_logging(&config) {
        Ok(logger) => Some(logger),
        Err(err) => {
            web_sys::console::warn_1(&format!("Logging disabled: {err}").into());
            None
        },
    };

    let _boot = wasm_bindgen_futures::future_to_promise(async move {
        boot(config).await.map(|()| JsValue::UNDEFINED).map_err(|err| {
            error!(error = %err, "Startup failed");
            JsError::new(&format!("{err:#}")).into()
        })
    });
}
