//! Configuration loading and types for clubsite.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading configs from files and the environment (`load`)

mod load;
mod types;

use std::path::{Path, PathBuf};

pub use load::DEFAULT_CONFIG_FILE;
pub use types::{Config, LegacyConfig, NavItem, PostsConfig, SocialLink};

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] ::config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("{0}")]
    Validation(String),
}

impl Config {
    /// Check cross-field constraints serde can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.posts.json.is_some() && self.posts.markdown_dir.is_some() {
            return Err(ConfigError::Validation(
                "invalid config: 'posts' may set either 'json' or 'markdown_dir', not both"
                    .to_string(),
            ));
        }

        if let Some(item) = self.nav.iter().find(|item| item.page.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "invalid config: nav item '{}' has an empty 'page'",
                item.key
            )));
        }

        Ok(())
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}
