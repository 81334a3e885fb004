// Downloader module: catalog, selection, staging and the merge pipeline

pub mod catalog;
pub mod errors;
pub mod extractor;
pub mod models;
pub mod muxer;
pub mod orchestrator;
pub mod prompt;
pub mod sanitize;
pub mod staging;
pub mod utils;

pub use errors::DownloadError;
pub use extractor::YtDlpProvider;
pub use models::{DownloadConfig, NetworkConfig};
pub use muxer::FfmpegMuxer;
pub use orchestrator::{Orchestrator, RunOutcome};
