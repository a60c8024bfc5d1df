//! File writing stage.
//!
//! Writes rendered files to the filesystem.

use crate::build::pipeline::{OutputFile, PipelineContext, PipelineError, Stage};

/// Stage that writes every rendered file to the output directory.
///
/// Parent directories are created as needed and existing files are
/// overwritten, so rebuilding into the same directory always succeeds.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        files: &mut Vec<OutputFile>,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for file in files.iter() {
            let output_path = ctx.output_dir.join(&file.path);

            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| PipelineError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            std::fs::write(&output_path, &file.contents).map_err(|source| {
                PipelineError::Write {
                    path: output_path.clone(),
                    source,
                }
            })?;
            log::debug!("wrote {}", output_path.display());
        }

        Ok(())
    }
}
