//! # way-config
//!
//! Layered configuration loading for Wayfinder using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WAYFINDER_*` prefix, `__` as separator)
//! 2. Project-level `.wayfinder/config.toml`
//! 3. User-level `~/.config/wayfinder/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WAYFINDER_ASSETS__BASE_URL` -> `assets.base_url`,
//! `WAYFINDER_LOOKUP__API_KEY` -> `lookup.api_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use way_config::WayConfig;
//!
//! let config = WayConfig::load_with_dotenv().expect("config");
//!
//! if config.assets.is_configured() {
//!     println!("probe ceiling: {}", config.navigation.probe_ceiling);
//! }
//! ```

mod assets;
mod error;
mod lookup;
mod manifest;
mod navigation;

pub use assets::AssetsConfig;
pub use error::ConfigError;
pub use lookup::LookupConfig;
pub use manifest::ManifestConfig;
pub use navigation::{DEFAULT_PROBE_CEILING, NavigationConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WayConfig {
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub manifest: ManifestConfig,
}

impl WayConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on extraction failure and
    /// [`ConfigError::InvalidValue`] when validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".wayfinder/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("WAYFINDER_").split("__"))
    }

    /// Reject values the navigation engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero probe ceiling or a
    /// `base_url` that is not `http(s)://`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigation.probe_ceiling == 0 {
            return Err(ConfigError::InvalidValue {
                field: "navigation.probe_ceiling".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.assets.has_http_host()
            && !(self.assets.base_url.starts_with("http://")
                || self.assets.base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "assets.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.assets.base_url),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wayfinder").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current dir.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
