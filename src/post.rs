//! Post records and the sources they are loaded from.

mod markdown;
mod sample;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{PostsConfig, resolve_path};

pub use sample::sample_posts;

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum PostError {
    #[error("post source not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse posts in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid front matter in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },
}

// =============================================================================
// Post record
// =============================================================================

/// A single blog entry.
///
/// The JSON form is the one the legacy extractor writes:
/// `{"id": 1, "title": "...", "date_posted": "2024-01-15", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date_posted: NaiveDate,
    /// HTML fragment, inserted into pages unescaped
    pub content: String,
}

impl Post {
    /// Long-form date as shown on pages ("January 15, 2024").
    pub fn display_date(&self) -> String {
        self.date_posted.format("%B %d, %Y").to_string()
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Load the posts selected by `config`, resolving paths against `base_path`.
///
/// `default_author` fills in Markdown posts that don't name an author.
pub fn load_posts(
    config: &PostsConfig,
    base_path: &Path,
    default_author: &str,
) -> Result<Vec<Post>, PostError> {
    match (&config.json, &config.markdown_dir) {
        (Some(json), _) => load_json(&resolve_path(base_path, json)),
        (None, Some(dir)) => markdown::load_dir(&resolve_path(base_path, dir), default_author),
        (None, None) => Ok(sample_posts()),
    }
}

/// Read a JSON array of post records.
pub fn load_json(path: &Path) -> Result<Vec<Post>, PostError> {
    if !path.exists() {
        return Err(PostError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| PostError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let posts: Vec<Post> = serde_json::from_str(&content).map_err(|source| PostError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("loaded {} post(s) from {}", posts.len(), path.display());
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        let post = &sample_posts()[0];
        assert_eq!(post.display_date(), "January 15, 2024");
    }

    #[test]
    fn test_default_source_is_sample() {
        let posts = load_posts(&PostsConfig::default(), Path::new("."), "QMES Team").unwrap();
        assert_eq!(posts, sample_posts());
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(
            &path,
            r#"[
  {
    "id": 7,
    "title": "Soldering 101",
    "subtitle": "Hot tips",
    "author": "Ada",
    "date_posted": "2024-04-01",
    "content": "<p>Mind the iron.</p>"
  }
]"#,
        )
        .unwrap();

        let config = PostsConfig {
            json: Some(PathBuf::from("posts.json")),
            markdown_dir: None,
        };
        let posts = load_posts(&config, dir.path(), "QMES Team").unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 7);
        assert_eq!(
            posts[0].date_posted,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_load_json_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, r#"[{"id": 1, "title": "No date"}]"#).unwrap();

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, PostError::Json { .. }));
    }

    #[test]
    fn test_load_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PostError::NotFound(_)));
    }

    #[test]
    fn test_json_shape_matches_extractor_output() {
        let json = serde_json::to_value(&sample_posts()[1]).unwrap();
        assert_eq!(json["date_posted"], "2024-02-20");
        assert_eq!(json["title"], "First Robotics Competition");
    }
}
