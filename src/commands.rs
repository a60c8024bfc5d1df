use std::path::{Path, PathBuf};

use crate::build::base_path_from_config;
use crate::config::Config;

pub mod build;
pub mod clean;
pub mod extract;
pub mod init;
pub mod jekyll;

/// Load the config named on the command line (or the default file) along
/// with the directory its relative paths resolve against.
fn load_config(config_file: Option<&Path>) -> Result<(Config, PathBuf), anyhow::Error> {
    let (config_path, required) = Config::path_from_arg(config_file)?;
    let config = Config::load_from_file(&config_path, required)?;
    let base_path = base_path_from_config(&config_path);
    Ok((config, base_path))
}
