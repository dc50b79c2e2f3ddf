//! Command-line interface definition for word-sieve
//!
//! Provides argument parsing and validation for the word sieving tool.

use clap::Parser;
use std::path::PathBuf;

/// Sieve raw word lists into clean, uppercase, letters-only lists
#[derive(Parser, Debug, Clone)]
#[command(
    name = "word-sieve",
    version,
    about = "Sieve raw word lists into clean, uppercase, letters-only lists",
    long_about = r#"
Reads a word list (one candidate per line), drops every line that trims to
fewer than three characters or contains anything besides the 26 ASCII
letters, and writes the survivors uppercased to the output file in the
original order.

EXAMPLES:
    # Sieve a raw list into usable_words.txt
    word-sieve -i short_words.txt

    # Explicit output path
    word-sieve -i short_words.txt -o clean.txt

    # Script-friendly: no banner, no progress, no summary
    word-sieve -i short_words.txt -q

    # Check the configuration without writing anything
    word-sieve -i short_words.txt --dry-run
"#
)]
pub struct Args {
    /// Input word list (one candidate word per line)
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Output file (overwritten on each run)
    #[arg(short, long, value_name = "PATH", default_value = "usable_words.txt")]
    pub output: PathBuf,

    /// Buffer size for file writes (e.g. "64KB", "1MB")
    #[arg(long, value_name = "SIZE", default_value = "1MB")]
    pub buffer_size: String,

    /// Show what would be done without writing files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        parse_size(&self.buffer_size)
    }
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if size_str.ends_with("GB") {
        (&size_str[..size_str.len() - 2], 1024 * 1024 * 1024)
    } else if size_str.ends_with("MB") {
        (&size_str[..size_str.len() - 2], 1024 * 1024)
    } else if size_str.ends_with("KB") {
        (&size_str[..size_str.len() - 2], 1024)
    } else if size_str.ends_with('B') {
        (&size_str[..size_str.len() - 1], 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    Ok(num * multiplier)
}
