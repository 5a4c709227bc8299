//! Query result formatting
//!
//! termcolor-based printing for located matches, keyword-in-context
//! windows, and build statistics.

use std::io::{self, Write};
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::index::BuildStats;
use crate::search::KwicMatch;

/// Bytes shown on each side of a located match excerpt, in addition to
/// the pattern length.
const EXCERPT_CONTEXT: usize = 10;

fn color_choice(color: bool) -> ColorChoice {
    if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints a located occurrence with a highlighted excerpt and the search
/// time.
pub fn print_located(
    text: &[u8],
    pattern: &[u8],
    position: usize,
    elapsed: Duration,
    color: bool,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(color));

    let from = position.saturating_sub(EXCERPT_CONTEXT + pattern.len());
    let to = (position + pattern.len() + EXCERPT_CONTEXT).min(text.len());

    write!(
        stdout,
        "Found pattern '{}' at index {} (",
        String::from_utf8_lossy(pattern),
        position
    )?;
    write!(stdout, "{}", sanitize(&text[from..position]))?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(
        stdout,
        "{}",
        sanitize(&text[position..position + pattern.len()])
    )?;
    stdout.reset()?;
    writeln!(stdout, "{})", sanitize(&text[position + pattern.len()..to]))?;
    writeln!(stdout, "Search took {:?}", elapsed)?;

    Ok(())
}

/// Prints keyword-in-context windows, one per line, with the match
/// highlighted and its text position as a prefix.
pub fn print_kwic_matches(
    text: &[u8],
    pattern_len: usize,
    matches: &[KwicMatch],
    color: bool,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(color));

    for m in matches {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", m.position)?;
        stdout.reset()?;
        write!(stdout, ":")?;

        write!(stdout, "{}", sanitize(&text[m.window.start..m.position]))?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(
            stdout,
            "{}",
            sanitize(&text[m.position..m.position + pattern_len])
        )?;
        stdout.reset()?;
        writeln!(
            stdout,
            "{}",
            sanitize(&text[m.position + pattern_len..m.window.end])
        )?;
    }

    Ok(())
}

/// Prints the not-found line for a pattern.
pub fn print_not_found(pattern: &[u8]) {
    println!("Pattern '{}' not found.", String::from_utf8_lossy(pattern));
}

/// Prints the build statistics block.
pub fn print_build_stats(stats: &BuildStats) {
    println!("Suffix Array Statistics");
    println!("=======================");
    println!();
    println!("Text length:      {}", stats.text_len);
    println!("Distinct symbols: {}", stats.distinct_symbols);
    println!("Doubling stages:  {}", stats.stages);
    println!("Working set:      {}", format_size(stats.working_set_bytes));
    println!();
    println!("Alphabet pass:    {:?}", stats.alphabet_time);
    println!("First stage:      {:?}", stats.first_stage_time);
    println!("Refinement:       {:?}", stats.refine_time);
    println!("Total build:      {:?}", stats.total_time);
}

/// Formats a byte count as a human readable size.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Replaces control characters with spaces so windows stay on one line.
fn sanitize(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_sanitize_flattens_control_bytes() {
        assert_eq!(sanitize(b"a\nb\r\tc"), "a b  c");
        assert_eq!(sanitize(b"plain"), "plain");
    }
}
