use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use memmap2::Mmap;

use kwix::index::{dump, BuildStats, SearchConfig, SuffixArray};
use kwix::output;
use kwix::search::{locate, KwicScanner};

#[derive(Parser)]
#[command(name = "kwix")]
#[command(about = "Suffix-array substring search with keyword-in-context output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single query against the text
    Query {
        /// Pattern to search for
        pattern: String,

        #[command(flatten)]
        input: InputArgs,

        /// Report one occurrence via binary search instead of a full scan
        #[arg(long)]
        naive: bool,

        /// Context bytes on each side of a match
        #[arg(short = 'C', long)]
        context: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Build the array, then read patterns interactively from stdin
    Search {
        #[command(flatten)]
        input: InputArgs,

        /// Context bytes on each side of a match
        #[arg(short = 'C', long)]
        context: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show construction statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the computed arrays to a text file
    Dump {
        #[command(flatten)]
        input: InputArgs,

        /// Output file
        #[arg(short, long, default_value = "out.txt")]
        output: PathBuf,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Read the text from a file
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Inline text to index
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Fold text and patterns to ASCII lowercase
    #[arg(short = 'i', long)]
    ignore_case: bool,
}

/// The loaded text: either a read-only mapping of the input file or an
/// owned buffer (inline text, or a case-folded copy).
enum TextSource {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl TextSource {
    fn as_bytes(&self) -> &[u8] {
        match self {
            TextSource::Mapped(map) => map,
            TextSource::Owned(bytes) => bytes,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            pattern,
            input,
            naive,
            context,
            no_color,
        } => handle_query(input, &pattern, naive, context, no_color),
        Commands::Search {
            input,
            context,
            no_color,
        } => handle_search(input, context, no_color),
        Commands::Stats { input, json } => handle_stats(input, json),
        Commands::Dump { input, output } => handle_dump(input, &output),
    }
}

fn load_text(input: &InputArgs) -> Result<TextSource> {
    let source = if let Some(path) = &input.file {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file '{}'", path.display()))?;
        let map = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to map input file '{}'", path.display()))?;
        TextSource::Mapped(map)
    } else if let Some(text) = &input.text {
        TextSource::Owned(text.clone().into_bytes())
    } else {
        bail!("No input given: pass TEXT or --file FILE");
    };

    if source.as_bytes().is_empty() {
        bail!("Input text is empty");
    }

    if input.ignore_case {
        return Ok(TextSource::Owned(source.as_bytes().to_ascii_lowercase()));
    }

    Ok(source)
}

fn fold_pattern(pattern: &[u8], ignore_case: bool) -> Vec<u8> {
    if ignore_case {
        pattern.to_ascii_lowercase()
    } else {
        pattern.to_vec()
    }
}

/// Builds the array, keeping a spinner up while large texts sort.
fn build_index(text: &[u8]) -> (SuffixArray<'_>, BuildStats) {
    #[cfg(feature = "progress")]
    let spinner = {
        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_message(format!("Indexing {} bytes", text.len()));
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner
    };

    let built = SuffixArray::build_with_stats(text);

    #[cfg(feature = "progress")]
    spinner.finish_and_clear();

    built
}

/// Resolves CLI flags against the configuration defaults.
fn search_config(context: Option<usize>, ignore_case: bool) -> SearchConfig {
    let defaults = SearchConfig::default();
    SearchConfig {
        context_width: context.unwrap_or(defaults.context_width),
        case_insensitive: ignore_case,
    }
}

fn handle_query(
    input: InputArgs,
    pattern: &str,
    naive: bool,
    context: Option<usize>,
    no_color: bool,
) -> Result<()> {
    let config = search_config(context, input.ignore_case);
    let source = load_text(&input)?;
    let pattern = fold_pattern(pattern.as_bytes(), config.case_insensitive);

    let (sa, stats) = build_index(source.as_bytes());
    println!("Indexed {} bytes in {:?}", stats.text_len, stats.total_time);

    let color = !no_color;
    let started = Instant::now();

    if naive {
        match locate(&sa, &pattern) {
            Some(position) => {
                output::print_located(sa.text(), &pattern, position, started.elapsed(), color)?;
            }
            None => output::print_not_found(&pattern),
        }
        return Ok(());
    }

    let matches = KwicScanner::new(&sa, config.context_width).scan(&pattern);
    if matches.is_empty() {
        output::print_not_found(&pattern);
    } else {
        output::print_kwic_matches(sa.text(), pattern.len(), &matches, color)?;
        println!("{} occurrence(s) in {:?}", matches.len(), started.elapsed());
    }

    Ok(())
}

#[derive(Clone, Copy)]
enum SearchMode {
    Kwic,
    Naive,
}

fn handle_search(input: InputArgs, context: Option<usize>, no_color: bool) -> Result<()> {
    let config = search_config(context, input.ignore_case);
    let source = load_text(&input)?;
    let (sa, stats) = build_index(source.as_bytes());
    output::print_build_stats(&stats);
    println!();

    let scanner = KwicScanner::new(&sa, config.context_width);
    let color = !no_color;
    let mut mode = SearchMode::Kwic;
    let mut stdin = io::stdin().lock();

    loop {
        print!("Type a substring to search for ('naive'/'kwic' switch mode, 'q' quits): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(|c| c == '\r' || c == '\n');

        match line {
            "" => continue,
            "q" => break,
            "naive" => {
                println!("Using 'naive' search.");
                mode = SearchMode::Naive;
                continue;
            }
            "kwic" => {
                println!("Using 'kwic' search.");
                mode = SearchMode::Kwic;
                continue;
            }
            _ => {}
        }

        let pattern = fold_pattern(line.as_bytes(), config.case_insensitive);
        let started = Instant::now();

        match mode {
            SearchMode::Naive => match locate(&sa, &pattern) {
                Some(position) => {
                    output::print_located(sa.text(), &pattern, position, started.elapsed(), color)?;
                }
                None => output::print_not_found(&pattern),
            },
            SearchMode::Kwic => {
                let matches = scanner.scan(&pattern);
                if matches.is_empty() {
                    output::print_not_found(&pattern);
                } else {
                    output::print_kwic_matches(sa.text(), pattern.len(), &matches, color)?;
                    println!("{} occurrence(s) in {:?}", matches.len(), started.elapsed());
                }
            }
        }
    }

    Ok(())
}

fn handle_stats(input: InputArgs, json: bool) -> Result<()> {
    let source = load_text(&input)?;
    let (_, stats) = build_index(source.as_bytes());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        output::print_build_stats(&stats);
    }

    Ok(())
}

fn handle_dump(input: InputArgs, output_path: &Path) -> Result<()> {
    let source = load_text(&input)?;
    let (sa, stats) = build_index(source.as_bytes());

    dump::write_dump(&sa, output_path)?;
    println!(
        "Wrote {} suffixes to {} (built in {:?})",
        sa.len(),
        output_path.display(),
        stats.total_time
    );

    Ok(())
}
