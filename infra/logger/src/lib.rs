//! # Logger
//!
//! A centralized logging utility for the project.
//! It installs one global `tracing` subscriber with environment-based filtering and a
//! formatting layer whose sink depends on the target:
//!
//! * **Native**: compact lines on stdout, ANSI colors optional.
//! * **wasm32**: one browser console call per event (`console.error`, `console.warn`, ...),
//!   without timestamps since the clock is unavailable there.
//!
//! Use [`LoggerBuilder::env_filter`] to set module-directed filters
//! (e.g., `"shelf_kernel=debug,dioxus=warn"`). On native targets `RUST_LOG` is layered over
//! them, so `RUST_LOG=shelf_kernel=trace` still takes effect.
//!
//! ## Example
//!
//! ```rust
//! # use shelf_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

#[cfg(target_arch = "wasm32")]
mod console;
mod error;

#[cfg(target_arch = "wasm32")]
pub use crate::console::{ConsoleMakeWriter, ConsoleWriter};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::str::FromStr;
use tracing::Subscriber;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    ansi: bool,
    level: LevelFilter,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, ansi: true, level: LevelFilter::INFO, env_filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `shelf_web=debug,dioxus=warn`).
    ///
    /// On native targets directives from `RUST_LOG` are layered on top and win for the same
    /// target; this is a programmatic default.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging (stdout natively, the browser console on wasm).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Toggles ANSI colors. Ignored on wasm, where the console styles by level itself.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let layers = vec![console_layer(&self.config)];

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(name = %self.name.0, level = %self.config.level, "Logger initialized");

        Ok(Logger { name: self.name.0 })
    }
}

/// A handle to the initialized logging system.
#[must_use = "Keep the handle for the lifetime of the application."]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// The `name` identifies the application in the initialization log line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelf_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("my-app")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Parses a textual level (`"info"`, `"DEBUG"`, `"off"`, ...).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown level names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
}

#[cfg(target_arch = "wasm32")]
fn console_layer<S>(_config: &LoggerConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    layer().without_time().with_ansi(false).with_writer(ConsoleMakeWriter).boxed()
}

#[cfg(not(target_arch = "wasm32"))]
fn console_layer<S>(config: &LoggerConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    layer().compact().with_ansi(config.ansi).boxed()
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if !config.console {
        return Err(LoggerError::InvalidConfiguration {
            message: "Console output is the only sink and it is disabled".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
            let directives = layer_directives(filter, env.as_deref());
            builder.parse(&directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            })
        },
    )
}

/// Appends `RUST_LOG` after the explicit directives; for the same target the later one wins.
fn layer_directives(filter: &str, env: Option<&str>) -> String {
    match env.map(str::trim).filter(|env| !env.is_empty()) {
        Some(env) if !filter.trim().is_empty() => format!("{filter},{env}"),
        Some(env) => env.to_owned(),
        None => filter.to_owned(),
    }
}
