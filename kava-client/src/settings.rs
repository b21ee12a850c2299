// Copyright (c) 2022 Kava Plugin Contributors

//! Build the client settings from the configuration files and the environment
//!
//! Layers, later ones overriding earlier ones:
//! 1. `base_config/config.toml`, or the file named by `KAVA_CLIENT_CONFIG_PATH`
//! 2. `config/config.toml`, or the file named by `KAVA_CLIENT_CONFIG_OVERRIDE_PATH`, if it exists
//! 3. the user configuration directory of the application, if it exists
//! 4. `KAVA_CLIENT_*` environment variables, sections separated by `__`
//!    (`KAVA_CLIENT_LOGGING__LEVEL=2`)

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Client settings
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub output: OutputSettings,
    #[serde(default)]
    pub token_table: TokenTableSettings,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct LoggingSettings {
    /// 0: warn, 1: info, 2: debug, 3 and more: trace
    pub level: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputSettings {
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct TokenTableSettings {
    /// token table file, none means every symbol takes the fallback identifier
    pub path: Option<PathBuf>,
}

/// Merge the settings layers of `app_name`, reading environment variables prefixed with `env_prefix`
pub fn build_client_settings(app_name: &str, env_prefix: &str) -> anyhow::Result<Settings> {
    let mut builder = config::Config::builder();
    let config_path = std::env::var(format!("{}_CONFIG_PATH", env_prefix))
        .unwrap_or_else(|_| "base_config/config.toml".to_string());
    builder = builder.add_source(config::File::with_name(&config_path));

    let config_override_path = std::env::var(format!("{}_CONFIG_OVERRIDE_PATH", env_prefix))
        .unwrap_or_else(|_| "config/config.toml".to_string());
    if Path::new(&config_override_path).is_file() {
        builder = builder.add_source(config::File::with_name(&config_override_path));
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "Kava", app_name) {
        let user_config_path = proj_dirs.config_dir().join("config.toml");
        if user_config_path.is_file() {
            builder = builder.add_source(config::File::from(user_config_path));
        }
    }

    let settings = builder
        .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
        .build()?;
    Ok(settings.try_deserialize()?)
}
