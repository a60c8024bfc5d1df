//! Extraction of posts from the old Flask site's SQLite database.
//!
//! Extraction is best effort: if the database can't be read, the built-in
//! sample posts are written instead so there is always something to build
//! from.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

use crate::config::{LegacyConfig, resolve_path};
use crate::post::{Post, sample_posts};

// =============================================================================
// Errors
// =============================================================================

/// Reasons the database could not supply posts. These trigger the fallback
/// rather than failing the command.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("database not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid table name '{0}'")]
    InvalidTable(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("post {id} has an unrecognised date_posted '{value}'")]
    BadDate { id: i64, value: String },

    #[error("no posts found in table '{0}'")]
    Empty(String),
}

/// Errors that abort extraction: the JSON output itself couldn't be written.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("failed to serialize posts: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Extraction
// =============================================================================

/// What an extraction run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// Posts were read from the database
    Extracted { path: PathBuf, count: usize },
    /// The database was unusable; the sample posts were written instead
    Sample {
        path: PathBuf,
        count: usize,
        reason: String,
    },
}

/// A row of the legacy `blogpost` table.
#[derive(Debug, sqlx::FromRow)]
struct LegacyRow {
    id: i64,
    title: String,
    subtitle: String,
    author: String,
    date_posted: String,
    content: String,
}

impl TryFrom<LegacyRow> for Post {
    type Error = SourceError;

    fn try_from(row: LegacyRow) -> Result<Self, Self::Error> {
        let date_posted =
            parse_date_posted(&row.date_posted).ok_or_else(|| SourceError::BadDate {
                id: row.id,
                value: row.date_posted.clone(),
            })?;

        Ok(Post {
            id: row.id,
            title: row.title,
            subtitle: row.subtitle,
            author: row.author,
            date_posted,
            content: row.content,
        })
    }
}

pub struct Extractor {
    database: PathBuf,
    table: String,
    output_dir: PathBuf,
    extracted_file: PathBuf,
    sample_file: PathBuf,
}

impl Extractor {
    /// Create an extractor from config, resolving paths against `base_path`.
    /// Output files are written to `base_path` unless overridden.
    pub fn new(config: &LegacyConfig, base_path: &Path) -> Self {
        Self {
            database: resolve_path(base_path, &config.database),
            table: config.table.clone(),
            output_dir: base_path.to_path_buf(),
            extracted_file: config.extracted_file.clone(),
            sample_file: config.sample_file.clone(),
        }
    }

    pub fn with_database(mut self, database: PathBuf) -> Self {
        self.database = database;
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn database(&self) -> &Path {
        &self.database
    }

    /// Read the database and write its posts, or the sample posts if it
    /// can't be read.
    pub async fn run(&self) -> Result<ExtractOutcome, ExtractError> {
        match self.read_posts().await {
            Ok(posts) => {
                let path = resolve_path(&self.output_dir, &self.extracted_file);
                write_json(&path, &posts)?;
                log::info!("extracted {} post(s) to {}", posts.len(), path.display());
                Ok(ExtractOutcome::Extracted {
                    path,
                    count: posts.len(),
                })
            }
            Err(e) => {
                log::warn!("could not extract posts from {}: {e}", self.database.display());
                let posts = sample_posts();
                let path = resolve_path(&self.output_dir, &self.sample_file);
                write_json(&path, &posts)?;
                Ok(ExtractOutcome::Sample {
                    path,
                    count: posts.len(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Read every post, newest first. Any bad row fails the whole read.
    pub async fn read_posts(&self) -> Result<Vec<Post>, SourceError> {
        if !self.database.is_file() {
            return Err(SourceError::NotFound(self.database.clone()));
        }
        if !is_identifier(&self.table) {
            return Err(SourceError::InvalidTable(self.table.clone()));
        }

        let mut conn = SqliteConnectOptions::new()
            .filename(&self.database)
            .read_only(true)
            .connect()
            .await?;

        let sql = format!(
            r#"
            SELECT id,
                   CAST(title AS TEXT) AS title,
                   CAST(COALESCE(subtitle, '') AS TEXT) AS subtitle,
                   CAST(COALESCE(author, '') AS TEXT) AS author,
                   CAST(date_posted AS TEXT) AS date_posted,
                   CAST(COALESCE(content, '') AS TEXT) AS content
            FROM "{}"
            ORDER BY date_posted DESC, id DESC
            "#,
            self.table
        );
        let rows = sqlx::query_as::<_, LegacyRow>(&sql)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        if rows.is_empty() {
            return Err(SourceError::Empty(self.table.clone()));
        }

        rows.into_iter().map(Post::try_from).collect()
    }
}

/// Parse a stored `date_posted`, keeping only the date.
///
/// SQLAlchemy writes `2024-01-15 10:30:00.000000`; other tools may write an
/// ISO `T` separator or a bare date.
fn parse_date_posted(value: &str) -> Option<NaiveDate> {
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
    ];

    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Write posts as pretty-printed JSON, creating parent directories.
fn write_json(path: &Path, posts: &[Post]) -> Result<(), ExtractError> {
    let json = serde_json::to_string_pretty(posts)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ExtractError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, json).map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use sqlx::SqliteConnection;

    use super::*;
    use crate::post::load_json;

    async fn create_db(path: &Path) -> SqliteConnection {
        let mut conn = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE blogpost (
                id INTEGER PRIMARY KEY,
                title VARCHAR(50) NOT NULL,
                subtitle VARCHAR(50),
                author VARCHAR(20),
                date_posted DATETIME,
                content TEXT
            )",
        )
        .execute(&mut conn)
        .await
        .unwrap();
        conn
    }

    async fn insert(conn: &mut SqliteConnection, id: i64, title: &str, date: &str) {
        sqlx::query(
            "INSERT INTO blogpost (id, title, subtitle, author, date_posted, content)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(title)
        .bind("Sub")
        .bind("Ada")
        .bind(date)
        .bind("<p>Body</p>")
        .execute(&mut *conn)
        .await
        .unwrap();
    }

    fn extractor(dir: &Path) -> Extractor {
        Extractor::new(&LegacyConfig::default(), dir)
    }

    #[tokio::test]
    async fn test_extracts_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("app")).unwrap();
        let mut conn = create_db(&dir.path().join("app/site.db")).await;
        insert(&mut conn, 1, "Older", "2024-01-15 10:30:00.000000").await;
        insert(&mut conn, 2, "Newer", "2024-03-01 09:00:00").await;
        insert(&mut conn, 3, "Café Night", "2024-02-01").await;
        conn.close().await.unwrap();

        let outcome = extractor(dir.path()).run().await.unwrap();
        let path = dir.path().join("extracted_blog_posts.json");
        assert_eq!(
            outcome,
            ExtractOutcome::Extracted {
                path: path.clone(),
                count: 3
            }
        );

        let posts = load_json(&path).unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Newer", "Café Night", "Older"]);
        assert_eq!(
            posts[2].date_posted,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Café Night"));
        assert!(raw.contains("\n  {\n    \"id\": 2,"));
        assert!(!dir.path().join("sample_blog_posts.json").exists());
    }

    #[tokio::test]
    async fn test_missing_database_writes_sample() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = extractor(dir.path()).run().await.unwrap();

        let path = dir.path().join("sample_blog_posts.json");
        match outcome {
            ExtractOutcome::Sample {
                path: written,
                count,
                reason,
            } => {
                assert_eq!(written, path);
                assert_eq!(count, 3);
                assert!(reason.contains("database not found"));
            }
            other => panic!("expected sample outcome, got {other:?}"),
        }

        assert_eq!(load_json(&path).unwrap(), sample_posts());
        // Never created by a read
        assert!(!dir.path().join("app/site.db").exists());
    }

    #[tokio::test]
    async fn test_empty_table_writes_sample() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("site.db");
        create_db(&db).await.close().await.unwrap();

        let outcome = extractor(dir.path())
            .with_database(db)
            .with_output_dir(dir.path().join("out"))
            .run()
            .await
            .unwrap();
        assert!(matches!(outcome, ExtractOutcome::Sample { .. }));
        assert!(dir.path().join("out/sample_blog_posts.json").is_file());
    }

    #[tokio::test]
    async fn test_bad_date_fails_whole_read() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("site.db");
        let mut conn = create_db(&db).await;
        insert(&mut conn, 1, "Fine", "2024-01-15").await;
        insert(&mut conn, 2, "Broken", "last tuesday").await;
        conn.close().await.unwrap();

        let err = extractor(dir.path())
            .with_database(db)
            .read_posts()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::BadDate { id: 2, .. }));
    }

    #[tokio::test]
    async fn test_missing_table_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("site.db");
        create_db(&db).await.close().await.unwrap();

        let mut config = LegacyConfig::default();
        config.table = "posts".to_string();
        let err = Extractor::new(&config, dir.path())
            .with_database(db.clone())
            .read_posts()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Database(_)));

        config.table = "posts; DROP TABLE blogpost".to_string();
        let err = Extractor::new(&config, dir.path())
            .with_database(db)
            .read_posts()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::InvalidTable(_)));
    }

    #[test]
    fn test_parse_date_posted() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15);
        assert_eq!(parse_date_posted("2024-01-15 10:30:00.123456"), expected);
        assert_eq!(parse_date_posted("2024-01-15 10:30:00"), expected);
        assert_eq!(parse_date_posted("2024-01-15T10:30:00"), expected);
        assert_eq!(parse_date_posted("2024-01-15"), expected);
        assert_eq!(parse_date_posted("15/01/2024"), None);
    }
}
