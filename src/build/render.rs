use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

use super::catalog::PlannedPost;
use super::paths::{LinkStyle, static_post_path};
use super::templates::BUILTIN_TEMPLATES;
use crate::config::{Config, SocialLink};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("theme not found: {0}")]
    ThemeNotFound(String),
}

/// The template renderer, wrapping Tera.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Create a renderer with only the built-in templates.
    pub fn builtin() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    /// Create a renderer whose templates are overridden by the theme
    /// directory's `templates/**/*.html`. Built-ins fill in the rest.
    pub fn with_theme(theme_path: &Path) -> Result<Self, RenderError> {
        let templates_path = theme_path.join("templates");
        if !templates_path.is_dir() {
            return Err(RenderError::ThemeNotFound(
                theme_path.display().to_string(),
            ));
        }

        let glob = templates_path.join("**/*.html");
        let glob_str = glob.to_string_lossy();
        // Theme templates may extend built-ins, so inheritance is resolved
        // only after both sets are loaded
        let mut tera = Tera::parse(&glob_str)?;
        let builtin = Self::builtin()?;
        tera.extend(&builtin.tera)?;

        log::info!("using theme templates from {}", templates_path.display());
        Ok(Self { tera })
    }

    /// Create the renderer the config asks for.
    pub fn for_config(config: &Config, base_path: &Path) -> Result<Self, RenderError> {
        match &config.theme.path {
            Some(path) => Self::with_theme(&crate::config::resolve_path(base_path, path)),
            None => Self::builtin(),
        }
    }

    /// Render a named template with the given page context.
    pub fn render(&self, template: &str, context: &PageContext) -> Result<String, RenderError> {
        let tera_context = Context::from_serialize(context)?;
        Ok(self.tera.render(template, &tera_context)?)
    }
}

#[cfg(test)]
impl Renderer {
    fn has_template(&self, template: &str) -> bool {
        self.tera.get_template_names().any(|name| name == template)
    }
}

/// Context passed to every template.
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    pub site: &'a SiteContext,
    pub page: PageInfo,
    pub links: Links,
    pub nav: Vec<NavLink>,
    /// Posts, newest first
    pub posts: &'a [PostView],
    /// The post a post page is about
    pub post: Option<&'a PostView>,
    pub gallery: &'a [String],
}

/// Site-level information.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub title: String,
    pub short_name: String,
    pub description: String,
    pub author: String,
    pub footer_note: String,
    pub social: Vec<SocialLink>,
}

impl SiteContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.site.title.clone(),
            short_name: config.site.short_name.clone(),
            description: config.site.description.clone(),
            author: config.site.author.clone(),
            footer_note: config.site.footer_note.clone(),
            social: config.social.clone(),
        }
    }
}

/// Information about the current page.
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub title: String,
    /// Nav key of this page, if it appears in the navigation bar
    pub key: Option<String>,
    /// Prefix leading back to the site root
    pub root: String,
}

/// Links every page's chrome needs, already in the output's link style.
#[derive(Debug, Clone, Serialize)]
pub struct Links {
    pub home: String,
    pub logo: String,
    pub favicon: String,
    pub stylesheet: String,
}

impl Links {
    pub fn new(style: &LinkStyle, stylesheet: &str) -> Self {
        Self {
            home: style.page("index"),
            logo: style.asset("images/logo.png"),
            favicon: style.asset("images/robot.png"),
            stylesheet: style.asset(stylesheet),
        }
    }
}

/// A navigation bar entry.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// CSS class (or Liquid expression producing it) for the current page
    pub active: String,
}

/// Build the navigation bar for a page.
pub fn nav_links(config: &Config, style: &LinkStyle, current: Option<&str>) -> Vec<NavLink> {
    config
        .nav
        .iter()
        .map(|item| NavLink {
            label: item.label.clone(),
            href: style.page(&item.page),
            active: style.active(item, current),
        })
        .collect()
}

/// A post as templates see it.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    /// ISO date (`2024-01-15`)
    pub date: String,
    /// Long-form date (`January 15, 2024`)
    pub display_date: String,
    /// Link to the post page, relative to the page rendering it
    pub url: String,
    pub content: String,
}

impl PostView {
    pub fn new(planned: &PlannedPost, style: &LinkStyle) -> Self {
        let post = &planned.post;
        let path = static_post_path(&planned.stem);
        Self {
            id: post.id,
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            author: post.author.clone(),
            date: post.date_posted.format("%Y-%m-%d").to_string(),
            display_date: post.display_date(),
            url: style.asset(&path.to_string_lossy().replace('\\', "/")),
            content: post.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::catalog::plan_posts;
    use crate::post::sample_posts;

    fn context<'a>(
        site: &'a SiteContext,
        config: &Config,
        posts: &'a [PostView],
        post: Option<&'a PostView>,
        style: &LinkStyle,
        key: Option<&str>,
    ) -> PageContext<'a> {
        PageContext {
            site,
            page: PageInfo {
                title: "Test".to_string(),
                key: key.map(String::from),
                root: style.root().to_string(),
            },
            links: Links::new(style, "styles/Styles.css"),
            nav: nav_links(config, style, key),
            posts,
            post,
            gallery: &[],
        }
    }

    #[test]
    fn test_builtin_templates_load() {
        let renderer = Renderer::builtin().unwrap();
        assert!(renderer.has_template("pages/index.html"));
        assert!(renderer.has_template("partials/nav.html"));
        assert!(renderer.has_template("jekyll/Gemfile"));
    }

    #[test]
    fn test_nav_marks_current_page() {
        let config = Config::default();
        let site = SiteContext::from_config(&config);
        let style = LinkStyle::relative(0);
        let ctx = context(&site, &config, &[], None, &style, Some("gallery"));

        let html = Renderer::builtin()
            .unwrap()
            .render("partials/nav.html", &ctx)
            .unwrap();
        assert!(html.contains(r#"<a href="gallery.html" class="nav-link active">GALLERY</a>"#));
        assert!(html.contains(r#"<a href="index.html" class="nav-link ">HOME</a>"#));
    }

    #[test]
    fn test_post_fields_escaped_content_raw() {
        let config = Config::default();
        let site = SiteContext::from_config(&config);
        let style = LinkStyle::relative(1);

        let mut posts = sample_posts();
        posts[0].title = "Robots <3 & Circuits".to_string();
        posts[0].author = "<script>alert(1)</script>".to_string();
        posts[0].content = "<p>Raw <em>HTML</em></p>".to_string();
        let planned = plan_posts(&posts[..1]);
        let view = PostView::new(&planned[0], &style);

        let ctx = context(&site, &config, &[], Some(&view), &style, None);
        let html = Renderer::builtin()
            .unwrap()
            .render("pages/post.html", &ctx)
            .unwrap();

        assert!(html.contains("Robots &lt;3 &amp; Circuits"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;&#x2F;script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("<p>Raw <em>HTML</em></p>"));
        assert!(html.contains(r#"href="../styles/Styles.css""#));
    }

    #[test]
    fn test_post_view_url() {
        let planned = plan_posts(&sample_posts());
        let view = PostView::new(&planned[2], &LinkStyle::relative(0));
        assert_eq!(view.url, "posts/2024-01-15-welcome-to-qmes.html");
        assert_eq!(view.display_date, "January 15, 2024");
    }

    #[test]
    fn test_theme_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let templates = dir.path().join("templates/bodies");
        std::fs::create_dir_all(&templates).unwrap();
        std::fs::write(
            templates.join("contact.html"),
            "<p>Write to {{ site.short_name }} at the club room.</p>",
        )
        .unwrap();

        let renderer = Renderer::with_theme(dir.path()).unwrap();
        let config = Config::default();
        let site = SiteContext::from_config(&config);
        let style = LinkStyle::relative(0);
        let ctx = context(&site, &config, &[], None, &style, Some("contact"));

        let html = renderer.render("pages/contact.html", &ctx).unwrap();
        assert!(html.contains("Write to QMES at the club room."));
        assert!(html.contains("mainNavbar"));
    }

    #[test]
    fn test_missing_theme() {
        let dir = tempfile::tempdir().unwrap();
        let err = Renderer::with_theme(&dir.path().join("nope")).err().unwrap();
        assert!(matches!(err, RenderError::ThemeNotFound(_)));
    }
}
