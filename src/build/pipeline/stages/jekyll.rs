//! Jekyll source tree stages.
//!
//! Jekyll does the final rendering, so these stages emit Liquid-aware
//! sources: `_config.yml`, layouts, includes, pages and `_posts/`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::build::catalog::PlannedPost;
use crate::build::paths::{LinkStyle, jekyll_post_path};
use crate::build::pipeline::{OutputFile, OutputKind, PipelineContext, PipelineError, Stage};
use crate::config::Config;

/// Files rendered from a template to the same path, minus the `jekyll/` prefix.
const SCAFFOLD_FILES: &[&str] = &[
    "_layouts/default.html",
    "_layouts/post.html",
    "_layouts/page.html",
    "_includes/navigation.html",
    "_includes/footer.html",
];

/// Top-level pages, rendered from `jekyll/<page>.html`.
const JEKYLL_PAGES: &[&str] = &["index", "about-us", "our-progress", "gallery", "contact"];

// =============================================================================
// _config.yml
// =============================================================================

#[derive(Debug, Serialize)]
struct JekyllSiteConfig<'a> {
    title: &'a str,
    description: &'a str,
    url: &'a str,
    baseurl: &'a str,
    author: &'a str,
    markdown: &'static str,
    highlighter: &'static str,
    permalink: &'static str,
    collections: BTreeMap<&'static str, CollectionConfig>,
    defaults: Vec<ScopedDefaults<'a>>,
    plugins: Vec<&'static str>,
    exclude: &'a [String],
}

#[derive(Debug, Serialize)]
struct CollectionConfig {
    output: bool,
    permalink: &'static str,
}

#[derive(Debug, Serialize)]
struct ScopedDefaults<'a> {
    scope: Scope,
    values: BTreeMap<&'static str, &'a str>,
}

#[derive(Debug, Serialize)]
struct Scope {
    path: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
}

const PERMALINK: &str = "/:title/";

fn jekyll_site_config(config: &Config) -> JekyllSiteConfig<'_> {
    let site = &config.site;
    JekyllSiteConfig {
        title: &site.title,
        description: &site.description,
        url: &site.url,
        baseurl: &site.baseurl,
        author: &site.author,
        markdown: "kramdown",
        highlighter: "rouge",
        permalink: PERMALINK,
        collections: BTreeMap::from([(
            "posts",
            CollectionConfig {
                output: true,
                permalink: PERMALINK,
            },
        )]),
        defaults: vec![
            ScopedDefaults {
                scope: Scope {
                    path: "",
                    kind: "posts",
                },
                values: BTreeMap::from([("layout", "post"), ("author", site.author.as_str())]),
            },
            ScopedDefaults {
                scope: Scope {
                    path: "",
                    kind: "pages",
                },
                values: BTreeMap::from([("layout", "page")]),
            },
        ],
        plugins: vec!["jekyll-feed", "jekyll-seo-tag"],
        exclude: &config.jekyll.exclude,
    }
}

/// Stage that writes `_config.yml`, `_data/gallery.yml` and the `Gemfile`.
pub struct JekyllConfigStage;

impl Stage for JekyllConfigStage {
    fn name(&self) -> &'static str {
        "jekyll-config"
    }

    fn process(
        &self,
        files: &mut Vec<OutputFile>,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let yaml = serde_yaml::to_string(&jekyll_site_config(ctx.config))?;
        files.push(OutputFile::new(
            "_config.yml",
            OutputKind::Config,
            format!("# Jekyll configuration for {}\n{yaml}", ctx.config.site.title),
        ));

        let gallery = serde_yaml::to_string(&ctx.config.gallery)?;
        files.push(OutputFile::new(
            "_data/gallery.yml",
            OutputKind::Config,
            gallery,
        ));

        let gemfile =
            ctx.render_page("jekyll/Gemfile", "", None, &LinkStyle::Liquid, &[], None)?;
        files.push(OutputFile::new("Gemfile", OutputKind::Config, gemfile));

        Ok(())
    }
}

// =============================================================================
// Layouts, includes and pages
// =============================================================================

/// Stage that renders layouts, includes and the top-level pages.
pub struct JekyllScaffoldStage;

impl Stage for JekyllScaffoldStage {
    fn name(&self) -> &'static str {
        "jekyll-scaffold"
    }

    fn process(
        &self,
        files: &mut Vec<OutputFile>,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let style = LinkStyle::Liquid;

        for path in SCAFFOLD_FILES {
            let template = format!("jekyll/{path}");
            let contents = ctx.render_page(&template, "", None, &style, &[], None)?;
            files.push(OutputFile::new(*path, OutputKind::Scaffold, contents));
        }

        for &page in JEKYLL_PAGES {
            let template = format!("jekyll/{page}.html");
            let contents = ctx.render_page(&template, "", Some(page), &style, &[], None)?;
            files.push(OutputFile::new(
                format!("{page}.html"),
                OutputKind::Page,
                contents,
            ));
        }

        Ok(())
    }
}

// =============================================================================
// _posts/
// =============================================================================

#[derive(Debug, Serialize)]
struct PostFrontMatter<'a> {
    layout: &'static str,
    title: &'a str,
    subtitle: &'a str,
    author: &'a str,
    date: NaiveDate,
    categories: &'a [String],
    tags: &'a [String],
}

/// Render a post as a Jekyll source file: YAML front matter, then content.
fn post_source(planned: &PlannedPost, config: &Config) -> Result<String, serde_yaml::Error> {
    let post = &planned.post;
    let front_matter = PostFrontMatter {
        layout: "post",
        title: &post.title,
        subtitle: &post.subtitle,
        author: &post.author,
        date: post.date_posted,
        categories: &config.jekyll.categories,
        tags: &config.jekyll.tags,
    };
    let yaml = serde_yaml::to_string(&front_matter)?;
    Ok(format!("---\n{yaml}---\n\n{}\n", post.content))
}

/// Stage that writes one `_posts/<stem>.md` per post.
pub struct JekyllPostsStage;

impl Stage for JekyllPostsStage {
    fn name(&self) -> &'static str {
        "jekyll-posts"
    }

    fn process(
        &self,
        files: &mut Vec<OutputFile>,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for planned in ctx.posts {
            let path = jekyll_post_path(&planned.stem);
            log::debug!("rendered {}", path.display());
            files.push(OutputFile::new(
                path,
                OutputKind::Post,
                post_source(planned, ctx.config)?,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::catalog::plan_posts;
    use crate::post::sample_posts;

    #[test]
    fn test_post_source_front_matter() {
        let mut posts = sample_posts();
        posts[0].title = r#"Q&A: "What's next?""#.to_string();
        let planned = plan_posts(&posts[..1]);
        let config = Config::default();

        let source = post_source(&planned[0], &config).unwrap();
        assert!(source.starts_with("---\n"));

        let mut parts = source.splitn(3, "---\n");
        parts.next();
        let yaml: serde_yaml::Value = serde_yaml::from_str(parts.next().unwrap()).unwrap();
        assert_eq!(yaml["layout"].as_str(), Some("post"));
        assert_eq!(yaml["title"].as_str(), Some(r#"Q&A: "What's next?""#));
        assert_eq!(yaml["author"].as_str(), Some("QMES Team"));
        assert_eq!(yaml["date"].as_str(), Some("2024-01-15"));
        assert_eq!(yaml["categories"][0].as_str(), Some("blog"));
        assert_eq!(yaml["tags"][2].as_str(), Some("robotics"));

        assert!(parts.next().unwrap().contains(&posts[0].content));
    }

    #[test]
    fn test_site_config_yaml() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&jekyll_site_config(&config)).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(
            value["title"].as_str(),
            Some("Queen Mary Electronics Society")
        );
        assert_eq!(value["baseurl"].as_str(), Some(""));
        assert_eq!(value["permalink"].as_str(), Some("/:title/"));
        assert_eq!(
            value["collections"]["posts"]["output"].as_bool(),
            Some(true)
        );
        assert_eq!(value["defaults"][0]["scope"]["type"].as_str(), Some("posts"));
        assert_eq!(
            value["defaults"][0]["values"]["author"].as_str(),
            Some("QMES Team")
        );
        assert_eq!(value["plugins"][1].as_str(), Some("jekyll-seo-tag"));
        assert!(
            value["exclude"]
                .as_sequence()
                .unwrap()
                .iter()
                .any(|v| v.as_str() == Some("app/"))
        );
    }
}
