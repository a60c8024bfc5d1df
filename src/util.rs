//! Shared utility functions.

use std::path::Path;

/// Convert a title to a URL/file-name slug.
///
/// Lower-cases, turns whitespace and hyphens into single hyphens and drops
/// all other punctuation.
/// "Welcome to QMES!" -> "welcome-to-qmes"
/// "Q&A: What's next?" -> "qa-whats-next"
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

/// List a directory tree as indented lines, directories first, each level
/// sorted by name.
///
/// ```text
/// docs/
///   images/
///     logo.png
///   index.html
/// ```
pub fn tree_lines(root: &Path) -> std::io::Result<Vec<String>> {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let mut lines = vec![format!("{name}/")];
    walk_tree(root, 1, &mut lines)?;
    Ok(lines)
}

fn walk_tree(dir: &Path, depth: usize, lines: &mut Vec<String>) -> std::io::Result<()> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        } else {
            files.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    dirs.sort();
    files.sort();

    let indent = "  ".repeat(depth);
    for sub in dirs {
        let name = sub
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        lines.push(format!("{indent}{name}/"));
        walk_tree(&sub, depth + 1, lines)?;
    }
    for file in files {
        lines.push(format!("{indent}{file}"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Welcome to QMES!"), "welcome-to-qmes");
        assert_eq!(slugify("First Robotics Competition"), "first-robotics-competition");
        assert_eq!(slugify("Q&A: What's next?"), "qa-whats-next");
        assert_eq!(slugify("  Spaced   out  "), "spaced-out");
        assert_eq!(slugify("Pre-event - notes"), "pre-event-notes");
        assert_eq!(slugify("Café Électronique"), "café-électronique");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        let title = "Weekly Electronics Workshops";
        assert_eq!(slugify(title), slugify(title));
    }

    #[test]
    fn test_tree_lines() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("docs");
        std::fs::create_dir_all(root.join("posts")).unwrap();
        std::fs::write(root.join("index.html"), "").unwrap();
        std::fs::write(root.join("about-us.html"), "").unwrap();
        std::fs::write(root.join("posts/2024-01-15-hello.html"), "").unwrap();

        let lines = tree_lines(&root).unwrap();
        assert_eq!(
            lines,
            vec![
                "docs/",
                "  posts/",
                "    2024-01-15-hello.html",
                "  about-us.html",
                "  index.html",
            ]
        );
    }
}
