//! Build pipeline for site generation.
//!
//! Each stage appends rendered files for one part of the site:
//!
//! - static HTML site: pages → posts → write
//! - Jekyll site: jekyll-config → jekyll-scaffold → jekyll-posts → write
//!
//! Build-wide stages (asset copying) run once the files are written.

mod context;
mod error;
mod output;
mod stages;

pub use context::{BuildReport, PipelineContext};
pub use error::PipelineError;
pub use output::{OutputFile, OutputKind};

use stages::{
    AssetsStage, JekyllConfigStage, JekyllPostsStage, JekyllScaffoldStage, PagesStage,
    PostsStage, WriteStage,
};

/// The two output trees the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    /// Plain HTML with relative links
    StaticHtml,
    /// A Jekyll source tree
    Jekyll,
}

impl SiteKind {
    /// Stylesheet path within the output tree.
    pub fn stylesheet(&self) -> &'static str {
        match self {
            SiteKind::StaticHtml => "styles/Styles.css",
            SiteKind::Jekyll => "assets/css/Styles.css",
        }
    }
}

/// A stage in the site generation pipeline.
///
/// Stages run in sequence. Each receives the files produced so far and may
/// append to them or rewrite them in place.
pub trait Stage: Send + Sync {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    fn process(
        &self,
        files: &mut Vec<OutputFile>,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// A stage that runs once after all files are written.
pub trait FinalizeStage: Send + Sync {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    fn finalize(&self, ctx: &mut PipelineContext) -> Result<(), PipelineError>;
}

/// The site generation pipeline.
pub struct Pipeline {
    /// File-producing stages, in order
    stages: Vec<Box<dyn Stage>>,
    /// Build-wide stages, run after the file stages
    finalize_stages: Vec<Box<dyn FinalizeStage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            finalize_stages: Vec::new(),
        }
    }

    /// The pipeline for `kind`.
    pub fn for_site(kind: SiteKind) -> Self {
        match kind {
            SiteKind::StaticHtml => Self::static_site(),
            SiteKind::Jekyll => Self::jekyll_site(),
        }
    }

    /// Stages: pages → posts → write, then assets.
    pub fn static_site() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(PagesStage);
        pipeline.add_stage(PostsStage);
        pipeline.add_stage(WriteStage);
        pipeline.add_finalize_stage(AssetsStage);
        pipeline
    }

    /// Stages: jekyll-config → jekyll-scaffold → jekyll-posts → write,
    /// then assets.
    pub fn jekyll_site() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(JekyllConfigStage);
        pipeline.add_stage(JekyllScaffoldStage);
        pipeline.add_stage(JekyllPostsStage);
        pipeline.add_stage(WriteStage);
        pipeline.add_finalize_stage(AssetsStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Add a finalize stage (runs after all files are written).
    pub fn add_finalize_stage<S: FinalizeStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.finalize_stages.push(Box::new(stage));
        self
    }

    /// Run every stage and return the files produced.
    pub fn run(&self, ctx: &mut PipelineContext) -> Result<Vec<OutputFile>, PipelineError> {
        let mut files = Vec::new();

        for stage in &self.stages {
            log::info!("running stage '{}'", stage.name());
            stage.process(&mut files, ctx)?;
        }

        for stage in &self.finalize_stages {
            log::info!("running finalize stage '{}'", stage.name());
            stage.finalize(ctx)?;
        }

        ctx.report.files = files.len();
        ctx.report.pages = count(&files, OutputKind::Page);
        ctx.report.posts = count(&files, OutputKind::Post);

        Ok(files)
    }

    /// Get the names of all stages in order, finalize stages last.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages
            .iter()
            .map(|s| s.name())
            .chain(self.finalize_stages.iter().map(|s| s.name()))
            .collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::static_site()
    }
}

fn count(files: &[OutputFile], kind: OutputKind) -> usize {
    files.iter().filter(|f| f.kind == kind).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_stage_order() {
        assert_eq!(
            Pipeline::static_site().stage_names(),
            ["pages", "posts", "write", "assets"]
        );
    }

    #[test]
    fn test_jekyll_stage_order() {
        assert_eq!(
            Pipeline::for_site(SiteKind::Jekyll).stage_names(),
            [
                "jekyll-config",
                "jekyll-scaffold",
                "jekyll-posts",
                "write",
                "assets"
            ]
        );
    }
}
