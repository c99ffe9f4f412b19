use config::{Config, File, FileFormat};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::debug;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", crate::error::format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Builds a configuration from an in-memory TOML document plus overrides.
///
/// Layers, lowest precedence first:
/// 1. **Bundled document**: usually embedded with `include_str!` since a browser has no
///    filesystem to read from.
/// 2. **Environment** (native targets only): variables prefixed with `SHELF__`, nested keys
///    separated by double underscores (`SHELF__APP__MOUNT_ID` maps to `app.mount_id`).
/// 3. **Overrides**: explicit `(key, value)` pairs, e.g. a base path captured at build time.
///
/// # Errors
/// Returns [`ConfigError`] if the document is not valid TOML, an override key is malformed,
/// or the merged result does not match `T`.
pub fn load_config_str<T>(source: &str, overrides: &[(&str, &str)]) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder().add_source(File::from_str(source, FileFormat::Toml));

    #[cfg(not(target_arch = "wasm32"))]
    {
        builder = builder.add_source(config::Environment::with_prefix("SHELF").separator("__"));
    }

    for (key, value) in overrides {
        debug!(key, value, "Applying config override");
        builder = builder
            .set_override(*key, *value)
            .context(format!("Failed to apply override for '{key}'"))?;
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
