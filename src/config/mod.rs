/// Category set loading from config.toml
pub mod categories;

pub use categories::{CategoryConfig, CategorySet, FALLBACK_COLOR};

use crate::errors::Result;
use std::path::Path;
use tracing::error;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "EXPENSE_TRACKER_CONFIG";

/// Config file used when neither the flag nor the environment variable is set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Application settings resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Categories expenses may be filed under
    pub categories: CategorySet,
}

/// Loads the application configuration from `path`.
pub fn load_app_configuration<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let categories = categories::load_categories(path)
        .inspect_err(|e| error!("Critical error loading category configuration: {e}"))?;
    Ok(AppConfig { categories })
}
