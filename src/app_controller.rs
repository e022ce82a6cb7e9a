use anyhow::Result;
use log::{debug, info, warn};
use std::path::Path;

use crate::alignment::{AlignmentReport, Aligner};
use crate::app_config::Config;
use crate::{pgo, srt, validation};

// @module: Application controller for PGO/SRT alignment

/// Result of a full load → align → save run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: AlignmentReport,
    /// Frame rate the alignment used
    pub fps: i64,
    /// Layout issues found after alignment, when validation is enabled
    pub layout_issues: usize,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Align `pgo_path` against `srt_path` and write the result to `output_path`
    pub fn run(&self, pgo_path: &Path, srt_path: &Path, output_path: &Path) -> Result<RunSummary> {
        debug!("Loading PGO file: {}", pgo_path.display());
        let mut document = pgo::load(pgo_path)?;

        debug!("Loading SRT file: {}", srt_path.display());
        let subtitles = srt::load(srt_path)?;

        let fps = self.config.effective_fps(document.fps);
        if fps <= 0 {
            warn!("Frame rate {} in {} is not positive", fps, pgo_path.display());
        }
        if fps != document.fps {
            info!("Aligning at {} fps instead of the file's {} fps", fps, document.fps);
        }

        let report = Aligner::new(&subtitles.cues, fps).align_document(&mut document);

        let layout_issues = if self.config.validate_output {
            validation::log_issues(&document)
        } else {
            0
        };

        pgo::save(output_path, &document)?;

        Ok(RunSummary {
            report,
            fps,
            layout_issues,
        })
    }
}
