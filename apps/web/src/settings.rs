use shelf_domain::config::AppConfig;
use shelf_kernel::config::{ConfigError, load_config_str};

/// Settings shipped inside the binary.
pub const BUNDLED_CONFIG: &str = include_str!("../shelf.toml");

/// History base path captured from the build environment, if any.
pub const BUILD_BASE_PATH: Option<&str> = option_env!("SHELF_BASE_PATH");

/// Loads the bundled settings, letting a build-time base path win over the bundled one.
///
/// # Errors
/// Returns [`ConfigError`] if the bundled document does not deserialize.
pub fn load() -> Result<AppConfig, ConfigError> {
    let overrides: Vec<(&str, &str)> =
        BUILD_BASE_PATH.map(|base| ("app.base_path", base)).into_iter().collect();
    load_config_str(BUNDLED_CONFIG, &overrides)
}
