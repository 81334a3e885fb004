// Media metadata/resolution provider: the yt-dlp binary behind a trait seam

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::errors::DownloadError;
use super::models::{NetworkConfig, Rendition, VideoMetadata};
use super::utils::{ensure_success, find_tool, run_tool};

/// Everything the provider returns for one resource.
#[derive(Debug, Clone)]
pub struct FetchedVideo {
    pub metadata: VideoMetadata,
    pub renditions: Vec<Rendition>,
}

/// External collaborator that resolves a URL into metadata plus adaptive
/// renditions and fetches a single rendition to a local path.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Name of the provider (for logging)
    fn name(&self) -> &'static str;

    /// Fetch metadata and the rendition list for a resource
    async fn fetch(&self, url: &str) -> Result<FetchedVideo, DownloadError>;

    /// Download one rendition, identified by its handle, to `dest`
    async fn download(&self, url: &str, handle: &str, dest: &Path) -> Result<(), DownloadError>;
}

/// Provider backed by the yt-dlp binary.
pub struct YtDlpProvider {
    ytdlp_path: String,
    network: NetworkConfig,
}

impl YtDlpProvider {
    pub fn new(network: NetworkConfig) -> Self {
        let ytdlp_path = find_tool("yt-dlp");
        debug!("using yt-dlp at {}", ytdlp_path);
        Self {
            ytdlp_path,
            network,
        }
    }

    fn common_args(&self) -> Vec<String> {
        let mut args = vec!["--no-playlist".to_string(), "--no-warnings".to_string()];
        if let Some(proxy) = &self.network.proxy {
            args.push("--proxy".to_string());
            args.push(proxy.clone());
        }
        args
    }
}

#[async_trait]
impl MediaProvider for YtDlpProvider {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn fetch(&self, url: &str) -> Result<FetchedVideo, DownloadError> {
        let mut args = vec!["--dump-json".to_string()];
        args.extend(self.common_args());
        args.push(url.to_string());

        let output = run_tool(&self.ytdlp_path, &args).await?;
        ensure_success(self.name(), &output)?;
        parse_fetched(&output.stdout)
    }

    async fn download(&self, url: &str, handle: &str, dest: &Path) -> Result<(), DownloadError> {
        let mut args = vec![
            "-f".to_string(),
            handle.to_string(),
            "-o".to_string(),
            dest.to_string_lossy().into_owned(),
        ];
        args.extend(self.common_args());
        args.push(url.to_string());

        let output = run_tool(&self.ytdlp_path, &args).await?;
        ensure_success(self.name(), &output)
    }
}

#[derive(Debug, Deserialize)]
struct RawInfo {
    title: Option<String>,
    uploader: Option<String>,
    duration: Option<f64>,
    #[serde(default)]
    formats: Vec<Rendition>,
}

fn parse_fetched(stdout: &[u8]) -> Result<FetchedVideo, DownloadError> {
    let raw: RawInfo = serde_json::from_slice(stdout)
        .map_err(|e| DownloadError::Parse(format!("invalid JSON: {}", e)))?;

    Ok(FetchedVideo {
        metadata: VideoMetadata {
            title: raw.title.unwrap_or_else(|| "Unknown".to_string()),
            author: raw.uploader.unwrap_or_else(|| "Unknown".to_string()),
            duration_seconds: raw.duration.unwrap_or(0.0) as u64,
        },
        renditions: raw.formats,
    })
}
