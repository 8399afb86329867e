//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tr_core::{ExportConfig, ExtractConfig};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Column geometry, sentinels and parse strictness.
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Workload base and reporting periods for `rows`.
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Loads configuration from default locations, then `config_path` if given.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TREPORT_*, nested keys split on __)
        figment = figment.merge(Env::prefixed("TREPORT_").split("__"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for treport.
///
/// On Linux: `~/.config/treport`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("treport"))
}
