// End-to-end sequencing: staging, metadata, selection, downloads, merge.
// The temp directory is owned by a scoped guard, so every exit path out of
// `run` — success, early return, error, unwind — releases it.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::info;

use super::catalog::CatalogBuilder;
use super::errors::DownloadError;
use super::extractor::MediaProvider;
use super::models::DownloadConfig;
use super::muxer::Muxer;
use super::prompt::{self, Selection};
use super::sanitize::sanitize_filename;
use super::staging::{StagingDir, StagingPaths, TEMP_DIR_NAME};

/// Terminal states of a run that are not failures. Early returns are
/// values, not errors; the process exits 0 for all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(PathBuf),
    AlreadyExists(PathBuf),
    NoResolutions,
    Cancelled,
}

pub struct Orchestrator<P, M> {
    config: DownloadConfig,
    provider: P,
    muxer: M,
}

impl<P: MediaProvider, M: Muxer> Orchestrator<P, M> {
    pub fn new(config: DownloadConfig, provider: P, muxer: M) -> Self {
        Self {
            config,
            provider,
            muxer,
        }
    }

    pub async fn run<R: BufRead, W: Write>(
        &self,
        url: &str,
        input: &mut R,
        out: &mut W,
    ) -> Result<RunOutcome, DownloadError> {
        std::fs::create_dir_all(&self.config.output_dir)?;
        let _staging = StagingDir::create(&self.config.output_dir.join(TEMP_DIR_NAME))?;

        writeln!(out, "Initializing video...")?;
        let fetched = self.provider.fetch(url).await?;
        info!(provider = self.provider.name(), "metadata fetched");

        writeln!(out, "Title: {}", fetched.metadata.title)?;
        writeln!(out, "Author: {}", fetched.metadata.author)?;
        writeln!(out, "Duration: {}", fetched.metadata.display_duration())?;

        let catalog = CatalogBuilder::build(&fetched.renditions);
        if catalog.is_empty() {
            writeln!(out, "No downloadable resolutions found.")?;
            return Ok(RunOutcome::NoResolutions);
        }

        prompt::display_catalog(&catalog, out)?;
        let chosen = match prompt::select_resolution(&catalog, input, out)? {
            Selection::Chosen(index) => &catalog[index],
            Selection::Cancelled => return Ok(RunOutcome::Cancelled),
        };
        writeln!(out, "\nSelected resolution: {}", chosen.label)?;

        let audio = CatalogBuilder::best_audio(&fetched.renditions)
            .ok_or(DownloadError::StreamUnresolvable("audio"))?;

        let base_name = sanitize_filename(&fetched.metadata.title);
        let paths = StagingPaths::derive(&self.config.output_dir, &base_name, &chosen.label);

        if paths.final_file.exists() {
            writeln!(out, "File already exists: {}", paths.final_file.display())?;
            return Ok(RunOutcome::AlreadyExists(paths.final_file));
        }

        writeln!(out, "Downloading video stream...")?;
        self.provider
            .download(url, &chosen.handle, &paths.video_file)
            .await?;
        if !paths.video_file.exists() {
            return Err(DownloadError::NotDownloaded(paths.video_file));
        }
        writeln!(out, "Video downloaded.")?;

        writeln!(out, "Downloading audio stream...")?;
        self.provider
            .download(url, &audio.format_id, &paths.audio_file)
            .await?;
        if !paths.audio_file.exists() {
            return Err(DownloadError::NotDownloaded(paths.audio_file));
        }
        writeln!(out, "Audio downloaded.")?;

        writeln!(out, "Merging video and audio with ffmpeg...")?;
        self.muxer
            .mux(&paths.video_file, &paths.audio_file, &paths.final_file)
            .await?;

        writeln!(out, "Download complete: {}", paths.final_file.display())?;
        Ok(RunOutcome::Completed(paths.final_file))
    }
}
