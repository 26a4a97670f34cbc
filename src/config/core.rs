use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::DumpConfig;
use crate::error::{DumpError, Result};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository-local config file name, read only from the working directory itself
pub const REPO_CONFIG_FILE: &str = "srcdump.toml";

/// Prefix for environment overrides, e.g. `SRCDUMP_FILTER__IGNORE_HIDDEN=true`
pub const ENV_PREFIX: &str = "SRCDUMP_";

impl DumpConfig {
    /// Load configuration from all layers, lowest priority first:
    /// embedded defaults, user config, repo config, custom config,
    /// environment, command-line overrides.
    pub fn load<T: Serialize>(custom_config: Option<&Path>, cli_overrides: Option<T>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .merge(Toml::file_exact(Self::user_config_path()))
            .merge(Toml::file_exact(REPO_CONFIG_FILE));

        if let Some(path) = custom_config {
            if !path.is_file() {
                return Err(DumpError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file(path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(overrides) = cli_overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides");
            figment = figment.merge(Serialized::defaults(overrides));
        }

        let config: DumpConfig = figment
            .extract()
            .map_err(|e| DumpError::Config(e.to_string()))?;

        tracing::debug!(
            file_types = config.filter.file_types.len(),
            ignore = config.filter.ignore.len(),
            ignore_hidden = config.filter.ignore_hidden,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| DumpError::Config(e.to_string()))
    }

    fn user_config_path() -> PathBuf {
        match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home).join(".config/srcdump/config.toml"),
            Err(_) => PathBuf::from("~/.config/srcdump/config.toml"),
        }
    }
}
