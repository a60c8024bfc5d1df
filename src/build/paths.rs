//! Path and link conventions for the two output trees.
//!
//! The static site links everything relatively so it can be opened from
//! disk or served from any prefix. The Jekyll tree hands links to Liquid's
//! `relative_url` filter so `baseurl` is applied at Jekyll build time.

use std::path::{Path, PathBuf};

use crate::config::NavItem;

/// Directory (within the static site) holding one page per post.
pub const STATIC_POSTS_DIR: &str = "posts";

/// Directory (within the Jekyll tree) holding post sources.
pub const JEKYLL_POSTS_DIR: &str = "_posts";

/// How generated markup refers to other pages and assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStyle {
    /// Relative links; `root` leads from the current page back to the site root
    /// (`""` at the top level, `"../"` one directory down).
    Relative { root: String },
    /// Liquid expressions resolved by Jekyll.
    Liquid,
}

impl LinkStyle {
    /// Relative links for a page `depth` directories below the site root.
    pub fn relative(depth: usize) -> Self {
        LinkStyle::Relative {
            root: "../".repeat(depth),
        }
    }

    /// Prefix from the current page back to the site root.
    pub fn root(&self) -> &str {
        match self {
            LinkStyle::Relative { root } => root,
            LinkStyle::Liquid => "",
        }
    }

    /// Link to a top-level page by name (`index`, `about-us`, ...).
    ///
    /// # Examples
    /// ```ignore
    /// LinkStyle::relative(1).page("gallery") => "../gallery.html"
    /// LinkStyle::Liquid.page("gallery") => "{{ '/gallery/' | relative_url }}"
    /// LinkStyle::Liquid.page("index") => "{{ '/' | relative_url }}"
    /// ```
    pub fn page(&self, page: &str) -> String {
        match self {
            LinkStyle::Relative { root } => format!("{root}{page}.html"),
            LinkStyle::Liquid => liquid_url(&jekyll_permalink(page)),
        }
    }

    /// Link to a file under the site root (`images/logo.png`).
    pub fn asset(&self, path: &str) -> String {
        match self {
            LinkStyle::Relative { root } => format!("{root}{path}"),
            LinkStyle::Liquid => liquid_url(&format!("/{path}")),
        }
    }

    /// CSS class marking `item` as the current page.
    ///
    /// Relative pages know their own key at generation time. Jekyll includes
    /// are shared by every page, so the check is deferred to Liquid.
    pub fn active(&self, item: &NavItem, current: Option<&str>) -> String {
        match self {
            LinkStyle::Relative { .. } => {
                if current == Some(item.key.as_str()) {
                    "active".to_string()
                } else {
                    String::new()
                }
            }
            LinkStyle::Liquid => {
                let permalink = jekyll_permalink(&item.page);
                if permalink == "/" {
                    "{% if page.url == '/' %}active{% endif %}".to_string()
                } else {
                    format!("{{% if page.url contains '{permalink}' %}}active{{% endif %}}")
                }
            }
        }
    }
}

/// The permalink Jekyll serves a top-level page at.
pub fn jekyll_permalink(page: &str) -> String {
    if page == "index" {
        "/".to_string()
    } else {
        format!("/{page}/")
    }
}

fn liquid_url(path: &str) -> String {
    format!("{{{{ '{path}' | relative_url }}}}")
}

/// Output path (relative to the static site root) of a post page.
pub fn static_post_path(stem: &str) -> PathBuf {
    Path::new(STATIC_POSTS_DIR).join(format!("{stem}.html"))
}

/// Output path (relative to the Jekyll root) of a post source.
pub fn jekyll_post_path(stem: &str) -> PathBuf {
    Path::new(JEKYLL_POSTS_DIR).join(format!("{stem}.md"))
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(key: &str, page: &str) -> NavItem {
        NavItem {
            key: key.to_string(),
            label: key.to_uppercase(),
            page: page.to_string(),
        }
    }

    #[test]
    fn test_relative_links() {
        let top = LinkStyle::relative(0);
        assert_eq!(top.page("index"), "index.html");
        assert_eq!(top.asset("images/logo.png"), "images/logo.png");

        let nested = LinkStyle::relative(1);
        assert_eq!(nested.root(), "../");
        assert_eq!(nested.page("gallery"), "../gallery.html");
        assert_eq!(nested.asset("styles/Styles.css"), "../styles/Styles.css");
    }

    #[test]
    fn test_liquid_links() {
        assert_eq!(LinkStyle::Liquid.page("index"), "{{ '/' | relative_url }}");
        assert_eq!(
            LinkStyle::Liquid.page("about-us"),
            "{{ '/about-us/' | relative_url }}"
        );
        assert_eq!(
            LinkStyle::Liquid.asset("images/logo.png"),
            "{{ '/images/logo.png' | relative_url }}"
        );
    }

    #[test]
    fn test_active_relative() {
        let style = LinkStyle::relative(0);
        assert_eq!(style.active(&nav("gallery", "gallery"), Some("gallery")), "active");
        assert_eq!(style.active(&nav("gallery", "gallery"), Some("contact")), "");
        assert_eq!(style.active(&nav("gallery", "gallery"), None), "");
    }

    #[test]
    fn test_active_liquid() {
        assert_eq!(
            LinkStyle::Liquid.active(&nav("home", "index"), None),
            "{% if page.url == '/' %}active{% endif %}"
        );
        assert_eq!(
            LinkStyle::Liquid.active(&nav("contact", "contact"), None),
            "{% if page.url contains '/contact/' %}active{% endif %}"
        );
    }

    #[test]
    fn test_post_paths() {
        assert_eq!(
            static_post_path("2024-01-15-welcome-to-qmes"),
            PathBuf::from("posts/2024-01-15-welcome-to-qmes.html")
        );
        assert_eq!(
            jekyll_post_path("2024-01-15-welcome-to-qmes"),
            PathBuf::from("_posts/2024-01-15-welcome-to-qmes.md")
        );
    }

    #[test]
    fn test_base_path_from_config() {
        assert_eq!(
            base_path_from_config(Path::new("/project/clubsite.yaml")),
            PathBuf::from("/project")
        );
        assert_eq!(
            base_path_from_config(Path::new("clubsite.yaml")),
            PathBuf::from("")
        );
    }
}
