//! Pipeline context for sharing state across stages.

use std::path::Path;

use crate::build::catalog::PlannedPost;
use crate::build::paths::LinkStyle;
use crate::build::render::{
    Links, PageContext, PageInfo, PostView, RenderError, Renderer, SiteContext, nav_links,
};
use crate::config::Config;

use super::SiteKind;

/// Counts of what a pipeline run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Rendered files of every kind
    pub files: usize,
    pub pages: usize,
    pub posts: usize,
    /// Asset files copied
    pub static_files: usize,
}

/// Shared context for pipeline stages.
pub struct PipelineContext<'a> {
    /// Which output tree is being built
    pub kind: SiteKind,

    /// Directory where output files are written
    pub output_dir: &'a Path,

    /// Directory relative config paths resolve against
    pub base_path: &'a Path,

    pub config: &'a Config,

    /// Site metadata passed to every template
    pub site: &'a SiteContext,

    pub renderer: &'a Renderer,

    /// Posts with their file stems, newest first
    pub posts: &'a [PlannedPost],

    /// Filled in by the stages as they run
    pub report: BuildReport,
}

impl<'a> PipelineContext<'a> {
    pub fn new(
        kind: SiteKind,
        output_dir: &'a Path,
        base_path: &'a Path,
        config: &'a Config,
        site: &'a SiteContext,
        renderer: &'a Renderer,
        posts: &'a [PlannedPost],
    ) -> Self {
        Self {
            kind,
            output_dir,
            base_path,
            config,
            site,
            renderer,
            posts,
            report: BuildReport::default(),
        }
    }

    /// Post views with URLs relative to pages rendered in `style`.
    pub fn post_views(&self, style: &LinkStyle) -> Vec<PostView> {
        self.posts
            .iter()
            .map(|planned| PostView::new(planned, style))
            .collect()
    }

    /// Render `template` for a page.
    ///
    /// `page` is the page name (`gallery`), used to mark the matching nav item
    /// active. Post pages pass `None`.
    pub fn render_page(
        &self,
        template: &str,
        title: &str,
        page: Option<&str>,
        style: &LinkStyle,
        posts: &[PostView],
        post: Option<&PostView>,
    ) -> Result<String, RenderError> {
        let key = page.and_then(|page| {
            self.config
                .nav
                .iter()
                .find(|item| item.page == page)
                .map(|item| item.key.as_str())
        });

        let context = PageContext {
            site: self.site,
            page: PageInfo {
                title: title.to_string(),
                key: key.map(String::from),
                root: style.root().to_string(),
            },
            links: Links::new(style, self.kind.stylesheet()),
            nav: nav_links(self.config, style, key),
            posts,
            post,
            gallery: &self.config.gallery,
        };

        self.renderer.render(template, &context)
    }
}
