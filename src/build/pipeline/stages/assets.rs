//! Static asset copying.

use std::path::Path;

use crate::build::pipeline::{FinalizeStage, PipelineContext, PipelineError, SiteKind};
use crate::config::resolve_path;

/// Finalize stage that copies the configured asset directories (images,
/// stylesheets) into the output tree.
///
/// A source directory that doesn't exist is skipped with a warning.
pub struct AssetsStage;

impl FinalizeStage for AssetsStage {
    fn name(&self) -> &'static str {
        "assets"
    }

    fn finalize(&self, ctx: &mut PipelineContext) -> Result<(), PipelineError> {
        let config = ctx.config;
        let dirs = match ctx.kind {
            SiteKind::StaticHtml => &config.assets.static_site,
            SiteKind::Jekyll => &config.assets.jekyll,
        };

        let mut copied = 0;
        for dir in dirs {
            let from = resolve_path(ctx.base_path, &dir.from);
            if !from.is_dir() {
                log::warn!("asset directory {} not found, skipping", from.display());
                continue;
            }

            let to = ctx.output_dir.join(&dir.to);
            let count = copy_dir(&from, &to)?;
            log::info!("copied {count} file(s) from {} to {}", from.display(), to.display());
            copied += count;
        }

        ctx.report.static_files += copied;
        Ok(())
    }
}

/// Recursively copy `from` into `to`, returning the number of files copied.
///
/// Hidden files and directories are skipped.
fn copy_dir(from: &Path, to: &Path) -> Result<usize, PipelineError> {
    std::fs::create_dir_all(to).map_err(|source| PipelineError::Write {
        path: to.to_path_buf(),
        source,
    })?;

    let mut copied = 0;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let file_name = entry.file_name();
        if file_name.to_string_lossy().starts_with('.') {
            continue;
        }

        let src = entry.path();
        let dest = to.join(&file_name);
        if src.is_dir() {
            copied += copy_dir(&src, &dest)?;
        } else if src.is_file() {
            std::fs::copy(&src, &dest).map_err(|source| PipelineError::Write {
                path: dest.clone(),
                source,
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}
