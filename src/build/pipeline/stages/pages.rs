//! Static HTML page stages.

use crate::build::paths::{LinkStyle, static_post_path};
use crate::build::pipeline::{OutputFile, OutputKind, PipelineContext, PipelineError, Stage};

/// `(page name, template, title)` of every top-level page.
const STATIC_PAGES: &[(&str, &str, &str)] = &[
    ("index", "pages/index.html", "Home"),
    ("about-us", "pages/about-us.html", "Become a Member"),
    ("our-progress", "pages/our-progress.html", "Our Progress"),
    ("gallery", "pages/gallery.html", "Gallery"),
    ("contact", "pages/contact.html", "Contact Us"),
];

/// Stage that renders the top-level pages (`index.html`, `gallery.html`, ...).
pub struct PagesStage;

impl Stage for PagesStage {
    fn name(&self) -> &'static str {
        "pages"
    }

    fn process(
        &self,
        files: &mut Vec<OutputFile>,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let style = LinkStyle::relative(0);
        let posts = ctx.post_views(&style);

        for &(page, template, title) in STATIC_PAGES {
            let html = ctx.render_page(template, title, Some(page), &style, &posts, None)?;
            log::debug!("rendered {page}.html");
            files.push(OutputFile::new(
                format!("{page}.html"),
                OutputKind::Page,
                html,
            ));
        }

        Ok(())
    }
}

/// Stage that renders one page per post under `posts/`.
pub struct PostsStage;

impl Stage for PostsStage {
    fn name(&self) -> &'static str {
        "posts"
    }

    fn process(
        &self,
        files: &mut Vec<OutputFile>,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        // Post pages sit one directory below the root
        let style = LinkStyle::relative(1);
        let posts = ctx.post_views(&style);

        for (planned, view) in ctx.posts.iter().zip(&posts) {
            let html = ctx.render_page(
                "pages/post.html",
                &planned.post.title,
                None,
                &style,
                &posts,
                Some(view),
            )?;
            let path = static_post_path(&planned.stem);
            log::debug!("rendered {}", path.display());
            files.push(OutputFile::new(path, OutputKind::Post, html));
        }

        Ok(())
    }
}
