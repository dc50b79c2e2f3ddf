//! Word Sieve - word list cleanup tool
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use word_sieve::cli::Args;
use word_sieve::processor::{Processor, ProcessorConfig};
use word_sieve::progress::{print_banner, print_error};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    // Validate arguments
    validate_args(&args)?;

    // Create and run processor
    let config = ProcessorConfig::from_args(&args)?;
    let mut processor = Processor::new(config);
    processor.process()?;

    Ok(())
}

/// Validate command-line arguments
fn validate_args(args: &Args) -> anyhow::Result<()> {
    // Check that input exists
    if !args.input.exists() {
        anyhow::bail!("Input path does not exist: {:?}", args.input);
    }

    // The output is truncated on open; refuse to clobber the input
    if args.input == args.output {
        anyhow::bail!(
            "Input and output must be different files: {:?}",
            args.input
        );
    }

    // Validate buffer size string
    args.parse_buffer_size()?;

    Ok(())
}
