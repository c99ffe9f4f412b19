use crate::device::DevicePreference;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub app: AppSection,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Application identity, host mount point and routing prefix.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSection {
    pub name: String,
    /// Id of the DOM element the application mounts into.
    pub mount_id: String,
    /// History base path; an opaque prefix handed to the routing table.
    pub base_path: String,
    pub device: DevicePreference,
}

/// Log level and optional module directives (e.g. `shelf=debug`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: Option<String>,
}

// --- Default ---

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "shelf".to_owned(),
            mount_id: "app".to_owned(),
            base_path: "/".to_owned(),
            device: DevicePreference::Auto,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None }
    }
}
