mod builder;
mod catalog;
mod paths;
pub mod pipeline;
mod render;
mod templates;

pub use builder::{BuildResult, Builder};
pub use paths::base_path_from_config;
pub use pipeline::SiteKind;
