//! Configuration loading from files.
//!
//! A YAML file is layered under `CLUBSITE__*` environment variables
//! (`CLUBSITE__OUTPUT__STATIC_SITE=public`).

use std::path::{Path, PathBuf};

use super::{Config, ConfigError};

/// Config file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "clubsite.yaml";

const ENV_PREFIX: &str = "CLUBSITE";

impl Config {
    /// Resolve the config path from the command line argument, defaulting to
    /// `clubsite.yaml` in the working directory.
    ///
    /// The default file is optional; a file named explicitly must exist.
    pub fn path_from_arg(config_file: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
        let (config_file, required) = match config_file {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        let config_file = if config_file.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file)
        } else {
            config_file.to_path_buf()
        };

        Ok((config_file, required))
    }

    /// Load the config from a file path, applying environment overrides.
    pub fn load_from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let config: Config = ::config::Config::builder()
            .add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Yaml)
                    .required(required),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!("loaded config from {}", path.display());

        Ok(config)
    }
}
