use std::path::PathBuf;

use crate::config::{Config, resolve_path};
use crate::post::{PostError, load_posts};

use super::catalog::plan_posts;
use super::pipeline::{Pipeline, PipelineContext, PipelineError, SiteKind};
use super::render::{RenderError, Renderer, SiteContext};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("post error: {0}")]
    Post(#[from] PostError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug)]
pub struct BuildResult {
    pub output_dir: PathBuf,
    /// Rendered files of every kind
    pub files: usize,
    pub pages: usize,
    pub posts: usize,
    pub static_files: usize,
}

pub struct Builder {
    config: Config,
    /// Base path for resolving relative paths (typically the config file's directory)
    base_path: PathBuf,
}

impl Builder {
    pub fn new(config: Config, base_path: PathBuf) -> Self {
        Self { config, base_path }
    }

    /// Build the plain HTML site.
    pub fn build_static_site(&self) -> Result<BuildResult, BuildError> {
        self.build(SiteKind::StaticHtml)
    }

    /// Build the Jekyll source tree.
    pub fn build_jekyll_site(&self) -> Result<BuildResult, BuildError> {
        self.build(SiteKind::Jekyll)
    }

    /// Get the output directory for `kind`, resolved against base_path.
    pub fn output_dir(&self, kind: SiteKind) -> PathBuf {
        let output = match kind {
            SiteKind::StaticHtml => &self.config.output.static_site,
            SiteKind::Jekyll => &self.config.output.jekyll,
        };
        resolve_path(&self.base_path, output)
    }

    fn build(&self, kind: SiteKind) -> Result<BuildResult, BuildError> {
        // 1. Load and name posts
        let posts = load_posts(
            &self.config.posts,
            &self.base_path,
            &self.config.site.author,
        )?;
        let planned = plan_posts(&posts);
        log::info!("loaded {} post(s)", planned.len());

        // 2. Load templates
        let renderer = Renderer::for_config(&self.config, &self.base_path)?;

        // 3. Create output directory
        let output_dir = self.output_dir(kind);
        std::fs::create_dir_all(&output_dir).map_err(|source| BuildError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;

        // 4. Render, write and copy assets
        let site = SiteContext::from_config(&self.config);
        let mut ctx = PipelineContext::new(
            kind,
            &output_dir,
            &self.base_path,
            &self.config,
            &site,
            &renderer,
            &planned,
        );
        Pipeline::for_site(kind).run(&mut ctx)?;
        let report = ctx.report;

        Ok(BuildResult {
            output_dir,
            files: report.files,
            pages: report.pages,
            posts: report.posts,
            static_files: report.static_files,
        })
    }
}
