//! Core processing engine
//!
//! Drives the single pass over the input word list: read, trim, validate,
//! transform, write.

use crate::cli::Args;
use crate::filter::{transform, Verdict, WordFilter, MIN_WORD_LEN};
use crate::output::OutputWriter;
use crate::progress::{
    create_bytes_progress_bar, print_bullet, print_header, print_info, print_success,
    print_warning, FilterStats,
};
use crate::reader::WordSource;

use bytesize::ByteSize;
use indicatif::ProgressBar;
use std::fs;
use std::path::PathBuf;

/// Processor configuration
pub struct ProcessorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub buffer_size: usize,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        Ok(Self {
            input: args.input.clone(),
            output: args.output.clone(),
            buffer_size: args.parse_buffer_size()?,
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Run the filter pipeline over any sequence of lines, feeding accepted
/// words to `sink` in source order.
///
/// This is the whole transformation: trim each line, keep it when it is
/// at least [`MIN_WORD_LEN`] characters of pure ASCII letters, and emit
/// it uppercased. Rejected lines produce nothing.
pub fn filter_lines<I, S, F>(lines: I, mut sink: F)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str),
{
    let filter = WordFilter::new();

    for line in lines {
        let word = line.as_ref().trim();
        if filter.matches(word) {
            sink(&transform(word));
        }
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
    stats: FilterStats,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            stats: FilterStats::new(),
        }
    }

    /// Run the full pass: input file to output file.
    ///
    /// Reader and writer live inside this call and are released on every
    /// exit path.
    pub fn process(&mut self) -> anyhow::Result<()> {
        let input_size = fs::metadata(&self.config.input).map(|m| m.len()).unwrap_or(0);

        if !self.config.quiet {
            print_header("Sieving word list...");
            print_info(&format!(
                "Input:  {:?} ({})",
                self.config.input,
                ByteSize(input_size)
            ));
            print_info(&format!("Output: {:?}", self.config.output));

            if self.config.verbose {
                print_info(&format!(
                    "Write buffer: {}",
                    ByteSize(self.config.buffer_size as u64)
                ));
            }
        }

        if self.config.dry_run {
            self.dry_run_report(input_size);
            return Ok(());
        }

        let source = WordSource::open(&self.config.input)?;
        let mut output = OutputWriter::create(&self.config.output, self.config.buffer_size)?;

        let pb = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_bytes_progress_bar(input_size, "Filtering...")
        };

        let filter = WordFilter::new();

        for line in source {
            let line = line?;
            let line_bytes = line.len() as u64 + 1;
            pb.inc(line_bytes);
            self.stats.add_line(line_bytes);

            let word = line.trim();
            match filter.evaluate(word) {
                Verdict::Accepted => {
                    output.write_line(&transform(word))?;
                    self.stats.add_kept();
                }
                Verdict::TooShort => self.stats.add_too_short(),
                Verdict::NotAlphabetic => self.stats.add_not_alphabetic(),
            }
        }

        output.flush()?;
        pb.finish_and_clear();

        log::info!(
            "kept {} of {} lines from {:?}",
            self.stats.kept,
            self.stats.lines_read,
            self.config.input
        );

        if !self.config.quiet {
            if self.stats.lines_read == 0 {
                print_warning("Input contained no lines");
            }
            print_success(&format!("Output written to: {:?}", output.path()));
            self.stats.print_summary();
        }

        Ok(())
    }

    /// Dry run report
    fn dry_run_report(&self, input_size: u64) {
        print_header("DRY RUN - no files will be written");

        print_bullet(&format!(
            "Would read:  {:?} ({})",
            self.config.input,
            ByteSize(input_size)
        ));
        print_bullet(&format!("Would write: {:?}", self.config.output));
        print_bullet(&format!(
            "Keeps words of {}+ ASCII letters, uppercased",
            MIN_WORD_LEN
        ));
    }

    /// Get processing statistics
    pub fn stats(&self) -> &FilterStats {
        &self.stats
    }
}
