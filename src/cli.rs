// Command line surface

use std::path::PathBuf;

use clap::Parser;

/// Download a video's best separate video and audio tracks at a chosen
/// resolution and merge them with ffmpeg.
#[derive(Debug, Parser)]
#[command(name = "ytgrab", version, about)]
pub struct Cli {
    /// Video page URL
    pub url: Option<String>,

    /// Directory the merged file is written to (defaults to the user's
    /// download directory)
    pub output_dir: Option<PathBuf>,

    /// Proxy URL passed through to the media provider
    /// (e.g. socks5://127.0.0.1:1080)
    #[arg(long)]
    pub proxy: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_and_optional_output_dir() {
        let cli = Cli::try_parse_from(["ytgrab", "https://example.com/v", "/videos"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://example.com/v"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/videos")));
        assert!(cli.proxy.is_none());
    }

    #[test]
    fn url_is_optional_at_parse_time() {
        // The missing-URL case is reported by main with usage on stdout,
        // not by clap.
        let cli = Cli::try_parse_from(["ytgrab"]).unwrap();
        assert!(cli.url.is_none());
    }

    #[test]
    fn accepts_proxy_flag() {
        let cli = Cli::try_parse_from([
            "ytgrab",
            "https://example.com/v",
            "--proxy",
            "socks5://127.0.0.1:1080",
        ])
        .unwrap();
        assert_eq!(cli.proxy.as_deref(), Some("socks5://127.0.0.1:1080"));
    }
}
