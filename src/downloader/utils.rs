// Tool discovery and subprocess helpers

use std::process::{Output, Stdio};

use tokio::process::Command;
use tracing::debug;

use super::errors::DownloadError;

/// Locate an external binary: well-known install paths first, then `which`,
/// then the bare name so PATH resolution gets the last word.
pub fn find_tool(name: &str) -> String {
    let common_paths = [
        format!("/opt/homebrew/bin/{}", name),
        format!("/usr/local/bin/{}", name),
        format!("/usr/bin/{}", name),
    ];

    for path in common_paths {
        if std::path::Path::new(&path).exists() {
            return path;
        }
    }

    if let Ok(output) = std::process::Command::new("which").arg(name).output() {
        if output.status.success() {
            if let Ok(path) = String::from_utf8(output.stdout) {
                let trimmed = path.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
    }

    name.to_string()
}

/// Run a tool to completion, capturing stdout and stderr. Blocks until the
/// process exits; no timeout is applied.
pub async fn run_tool(program: &str, args: &[String]) -> Result<Output, DownloadError> {
    debug!(tool = program, "running {} {}", program, args.join(" "));
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| DownloadError::from_spawn(program, e))
}

/// Map a non-zero exit into ToolFailed with a short stderr excerpt.
pub fn ensure_success(tool: &str, output: &Output) -> Result<(), DownloadError> {
    if output.status.success() {
        return Ok(());
    }
    Err(DownloadError::ToolFailed {
        tool: tool.to_string(),
        status: output
            .status
            .code()
            .map(|c| format!("exit code {}", c))
            .unwrap_or_else(|| "terminated by signal".to_string()),
        detail: stderr_excerpt(&output.stderr),
    })
}

/// Short actionable excerpt of a tool's stderr: `ERROR:` lines when present,
/// otherwise the last non-empty line.
pub(crate) fn stderr_excerpt(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let error_lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("ERROR:"))
        .take(2)
        .collect();

    if !error_lines.is_empty() {
        return error_lines.join(" | ");
    }

    text.lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("no error output")
        .to_string()
}
