// Error types for the download pipeline

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    /// External binary (yt-dlp, ffmpeg) could not be located
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Failed to spawn or wait on an external tool
    #[error("Failed to run {tool}: {source}")]
    Execution {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool ran but exited non-zero
    #[error("{tool} failed ({status}): {detail}")]
    ToolFailed {
        tool: String,
        status: String,
        detail: String,
    },

    /// Provider output could not be decoded
    #[error("Failed to parse video metadata: {0}")]
    Parse(String),

    /// No suitable video or audio rendition for the requested container
    #[error("Could not find a suitable {0} stream")]
    StreamUnresolvable(&'static str),

    /// A download call returned without producing the expected file
    #[error("File not downloaded: {}", .0.display())]
    NotDownloaded(PathBuf),

    /// Filesystem error while staging
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DownloadError {
    /// Spawn-error constructor; a NotFound io error means the binary itself
    /// is missing rather than the invocation failing.
    pub fn from_spawn(tool: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ToolNotFound(tool.to_string())
        } else {
            Self::Execution {
                tool: tool.to_string(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_not_found_maps_to_tool_not_found() {
        let err = DownloadError::from_spawn(
            "yt-dlp",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(matches!(err, DownloadError::ToolNotFound(t) if t == "yt-dlp"));
    }

    #[test]
    fn spawn_other_maps_to_execution() {
        let err = DownloadError::from_spawn(
            "ffmpeg",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, DownloadError::Execution { tool, .. } if tool == "ffmpeg"));
    }
}
