mod cli;
mod downloader;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use downloader::{
    DownloadConfig, FfmpegMuxer, NetworkConfig, Orchestrator, RunOutcome, YtDlpProvider,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let url = match cli.url {
        Some(url) => url,
        None => {
            println!("Usage: ytgrab <video-url> [output-directory]");
            std::process::exit(1);
        }
    };

    let config = match cli.output_dir {
        Some(output_dir) => DownloadConfig { output_dir },
        None => DownloadConfig::default(),
    };
    let network = NetworkConfig { proxy: cli.proxy };

    info!("starting ytgrab v{}", env!("CARGO_PKG_VERSION"));

    let orchestrator =
        Orchestrator::new(config, YtDlpProvider::new(network), FfmpegMuxer::new());

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    // Run failures are reported on stdout; only the usage error above maps
    // to a non-zero exit.
    match orchestrator.run(&url, &mut input, &mut out).await {
        Ok(RunOutcome::Cancelled) => println!("\nOperation cancelled."),
        Ok(_) => {}
        Err(e) => println!("Error: {}", e),
    }
}
