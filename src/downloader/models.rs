// Common data models for the downloader

use std::path::PathBuf;

use serde::Deserialize;

/// Read-only video metadata, fetched once per run. Used for display and
/// filename derivation only.
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    pub title: String,
    pub author: String,
    pub duration_seconds: u64,
}

impl VideoMetadata {
    /// Duration as `minutes:seconds` with zero-padded seconds ("2:05").
    pub fn display_duration(&self) -> String {
        format!(
            "{}:{:02}",
            self.duration_seconds / 60,
            self.duration_seconds % 60
        )
    }
}

/// One row of the provider's `formats` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendition {
    #[serde(default)]
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    pub height: Option<u32>,
    pub fps: Option<f64>,
    /// Audio bitrate in kbps
    pub abr: Option<f64>,
    pub filesize: Option<u64>,
    pub filesize_approx: Option<u64>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
}

impl Rendition {
    /// Exact file size when known, approximate otherwise.
    pub fn effective_size(&self) -> Option<u64> {
        self.filesize.or(self.filesize_approx)
    }

    /// Adaptive video-only rendition (video track, no audio track).
    pub fn is_video_only(&self) -> bool {
        self.vcodec.as_deref().map_or(false, |v| v != "none")
            && self.acodec.as_deref().map_or(true, |a| a == "none")
    }

    /// Adaptive audio-only rendition (audio track, no video track).
    pub fn is_audio_only(&self) -> bool {
        self.acodec.as_deref().map_or(false, |a| a != "none")
            && self.vcodec.as_deref().map_or(true, |v| v == "none")
    }

    /// The fixed container this tool downloads. The provider reports
    /// mp4-family audio as `m4a`.
    pub fn is_mp4_container(&self) -> bool {
        matches!(self.ext.as_str(), "mp4" | "m4a")
    }

    /// Resolution label ("1080p"); None when the provider gave no height.
    pub fn resolution_label(&self) -> Option<String> {
        self.height.map(|h| format!("{}p", h))
    }
}

/// A selectable video quality, presented to the user once and consumed by
/// the download step. Labels are unique within a catalog.
#[derive(Debug, Clone)]
pub struct ResolutionOption {
    /// Display label (e.g. "1080p")
    pub label: String,
    /// Frames per second, when reported
    pub fps: Option<u32>,
    /// Estimated byte size, when reported
    pub filesize: Option<u64>,
    /// Provider handle for the downloadable stream (format id)
    pub handle: String,
}

/// Orchestrator configuration, built in main and passed in at construction
/// time.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub output_dir: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            output_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Network options threaded to every provider invocation.
#[derive(Debug, Clone, Default)]
pub struct NetworkConfig {
    /// Proxy URL (e.g. "socks5://127.0.0.1:1080"), passed through to yt-dlp
    pub proxy: Option<String>,
}
