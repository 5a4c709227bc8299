//! Human-readable dump of the computed arrays
//!
//! Debugging aid, not an interface contract: the sorted suffixes with
//! clipped previews, followed by the inverse permutation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::SuffixArray;

/// Longest suffix preview written per line.
const PREVIEW_LEN: usize = 72;

/// Writes the dump for `sa` to `path`.
pub fn write_dump(sa: &SuffixArray<'_>, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create dump file '{}'", path.display()))?;
    let mut out = BufWriter::with_capacity(65536, file);

    write_dump_to(sa, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Writes the dump for `sa` to any writer.
pub fn write_dump_to<W: Write>(sa: &SuffixArray<'_>, out: &mut W) -> Result<()> {
    let text = sa.text();

    writeln!(out, "Sorted suffixes:")?;
    writeln!(out, "rank: position => suffix")?;
    for (rank, pos) in sa.positions().enumerate() {
        writeln!(out, "{}: {} => {}", rank, pos, preview(&text[pos..]))?;
    }

    writeln!(out)?;
    writeln!(out, "Rank of suffix (inverse):")?;
    let ranks: Vec<String> = sa.ranks().map(|rank| rank.to_string()).collect();
    writeln!(out, "{}", ranks.join(", "))?;

    Ok(())
}

/// Clips a suffix to `PREVIEW_LEN` bytes and flattens control characters
/// so every entry stays on one line.
fn preview(suffix: &[u8]) -> String {
    let clipped = &suffix[..suffix.len().min(PREVIEW_LEN)];
    let mut line: String = String::from_utf8_lossy(clipped)
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if suffix.len() > PREVIEW_LEN {
        line.push_str("...");
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_dump_contents() {
        let sa = SuffixArray::build(b"banana");
        let mut out = Vec::new();

        write_dump_to(&sa, &mut out).unwrap();
        let dump = String::from_utf8(out).unwrap();

        assert!(dump.contains("0: 5 => a\n"));
        assert!(dump.contains("3: 0 => banana\n"));
        assert!(dump.contains("3, 2, 5, 1, 4, 0"));
    }

    #[test]
    fn test_dump_to_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.txt");

        let sa = SuffixArray::build(b"abracadabra");
        write_dump(&sa, &path).unwrap();

        let dump = fs::read_to_string(&path).unwrap();
        assert!(dump.starts_with("Sorted suffixes:"));
        assert!(dump.contains("2: 0 => abracadabra\n"));
    }

    #[test]
    fn test_preview_clips_long_suffixes() {
        let text = vec![b'x'; 200];
        let line = preview(&text);

        assert_eq!(line.len(), PREVIEW_LEN + 3);
        assert!(line.ends_with("..."));
    }

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(preview(b"a\nb\rc"), "a b c");
    }
}
