// External muxing: combine the staged video and audio tracks into the
// final container without re-encoding

use std::path::Path;

use async_trait::async_trait;

use super::errors::DownloadError;
use super::utils::{ensure_success, find_tool, run_tool};

/// External collaborator performing the stream-copy remux.
#[async_trait]
pub trait Muxer: Send + Sync {
    async fn mux(&self, video: &Path, audio: &Path, dest: &Path) -> Result<(), DownloadError>;
}

/// Muxer backed by the ffmpeg binary. The subprocess exit status is
/// checked; a non-zero exit surfaces as ToolFailed instead of being
/// mistaken for success.
pub struct FfmpegMuxer {
    ffmpeg_path: String,
}

impl FfmpegMuxer {
    pub fn new() -> Self {
        Self {
            ffmpeg_path: find_tool("ffmpeg"),
        }
    }
}

impl Default for FfmpegMuxer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Muxer for FfmpegMuxer {
    async fn mux(&self, video: &Path, audio: &Path, dest: &Path) -> Result<(), DownloadError> {
        let args = build_args(video, audio, dest);
        let output = run_tool(&self.ffmpeg_path, &args).await?;
        ensure_success("ffmpeg", &output)
    }
}

fn build_args(video: &Path, audio: &Path, dest: &Path) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-i".to_string(),
        video.to_string_lossy().into_owned(),
        "-i".to_string(),
        audio.to_string_lossy().into_owned(),
        "-c".to_string(),
        "copy".to_string(),
        dest.to_string_lossy().into_owned(),
    ]
}
