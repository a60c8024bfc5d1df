//! Markdown post files.
//!
//! A post file carries its record fields as YAML front matter and its body
//! as Markdown:
//!
//! ```markdown
//! ---
//! title: Soldering 101
//! subtitle: Hot tips
//! date: 2024-04-01
//! ---
//!
//! Mind the **iron**.
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pulldown_cmark::{Options, Parser, html};
use serde::Deserialize;

use super::{Post, PostError};

/// Front matter recognised in a post file.
#[derive(Debug, Default, Deserialize)]
pub struct PostFrontMatter {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Result of splitting a post file into front matter and body.
#[derive(Debug)]
pub struct ParsedPost {
    pub front_matter: PostFrontMatter,
    /// The Markdown body without the front matter block
    pub content: String,
}

/// Split the YAML front matter block off the start of `content`.
///
/// A file without a `---` block yields empty front matter. A block that
/// isn't valid YAML is an error, since every post field comes from it.
pub fn parse_front_matter(content: &str) -> Result<ParsedPost, serde_yaml::Error> {
    let content = content.trim_start();

    if !content.starts_with("---") {
        return Ok(ParsedPost {
            front_matter: PostFrontMatter::default(),
            content: content.to_string(),
        });
    }

    let after_opening = &content[3..];
    let Some(closing_pos) = after_opening.find("\n---") else {
        return Ok(ParsedPost {
            front_matter: PostFrontMatter::default(),
            content: content.to_string(),
        });
    };

    let yaml_content = after_opening[..closing_pos].trim_start_matches('\n');

    // "---" + yaml + "\n---"
    let body_start = 3 + closing_pos + 4;
    let body = if body_start < content.len() {
        content[body_start..].trim_start_matches('\n').to_string()
    } else {
        String::new()
    };

    let front_matter = if yaml_content.trim().is_empty() {
        PostFrontMatter::default()
    } else {
        serde_yaml::from_str(yaml_content)?
    };

    Ok(ParsedPost {
        front_matter,
        content: body,
    })
}

/// Render a Markdown body to an HTML fragment.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Load every `*.md` file in `dir` as a post, in file-name order.
///
/// Posts without an `id` are numbered after the highest explicit id.
pub(super) fn load_dir(dir: &Path, default_author: &str) -> Result<Vec<Post>, PostError> {
    if !dir.is_dir() {
        return Err(PostError::NotFound(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|source| PostError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PostError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();

    let mut parsed = Vec::with_capacity(files.len());
    for path in files {
        let raw = std::fs::read_to_string(&path).map_err(|source| PostError::Read {
            path: path.clone(),
            source,
        })?;
        let post = parse_front_matter(&raw).map_err(|e| PostError::FrontMatter {
            path: path.clone(),
            message: e.to_string(),
        })?;
        parsed.push((path, post));
    }

    let mut next_id = parsed
        .iter()
        .filter_map(|(_, p)| p.front_matter.id)
        .max()
        .unwrap_or(0)
        + 1;

    let mut posts = Vec::with_capacity(parsed.len());
    for (path, ParsedPost { front_matter, content }) in parsed {
        let missing = |field: &str| PostError::FrontMatter {
            path: path.clone(),
            message: format!("missing required field '{field}'"),
        };

        let title = front_matter.title.ok_or_else(|| missing("title"))?;
        let date_posted = front_matter.date.ok_or_else(|| missing("date"))?;
        let id = front_matter.id.unwrap_or_else(|| {
            let id = next_id;
            next_id += 1;
            id
        });

        posts.push(Post {
            id,
            title,
            subtitle: front_matter.subtitle.unwrap_or_default(),
            author: front_matter
                .author
                .unwrap_or_else(|| default_author.to_string()),
            date_posted,
            content: render_markdown(&content),
        });
    }

    log::info!("loaded {} post(s) from {}", posts.len(), dir.display());
    Ok(posts)
}
