// Resolution menu rendering and validated selection

use std::io::{BufRead, Write};

use super::models::ResolutionOption;

/// Outcome of the selection loop. Cancellation (end of input) terminates
/// the whole program with exit code 0; no downloads have started yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 0-based index into the catalog
    Chosen(usize),
    Cancelled,
}

/// Render the numbered resolution menu.
pub fn display_catalog<W: Write>(options: &[ResolutionOption], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\nAvailable resolutions:")?;
    writeln!(out, "{}", "-".repeat(50))?;
    for (i, option) in options.iter().enumerate() {
        let fps_text = option
            .fps
            .map(|f| format!(" @ {}fps", f))
            .unwrap_or_default();
        let size_text = option
            .filesize
            .map(|s| format!(" ({}MB)", s / (1024 * 1024)))
            .unwrap_or_default();
        writeln!(out, "{:2}. {}{}{}", i + 1, option.label, fps_text, size_text)?;
    }
    writeln!(out, "{}", "-".repeat(50))?;
    Ok(())
}

/// Prompt for a 1-based index until a valid selection is made or input ends.
///
/// Invalid input re-prompts with guidance; the same input sequence always
/// resolves to the same option. The catalog must be non-empty.
pub fn select_resolution<R: BufRead, W: Write>(
    options: &[ResolutionOption],
    input: &mut R,
    out: &mut W,
) -> std::io::Result<Selection> {
    debug_assert!(!options.is_empty());

    loop {
        write!(out, "\nSelect resolution (1-{}): ", options.len())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Selection::Cancelled);
        }

        let choice = line.trim();
        if choice.is_empty() {
            writeln!(out, "Please enter a resolution number.")?;
            continue;
        }

        match choice.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => {
                return Ok(Selection::Chosen(n - 1));
            }
            Ok(_) => {
                writeln!(out, "Please enter a number between 1 and {}.", options.len())?;
            }
            Err(_) => {
                writeln!(out, "Please enter a valid number.")?;
            }
        }
    }
}
