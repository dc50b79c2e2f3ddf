//! # Word Sieve
//!
//! Cleans up raw word lists for downstream use.
//!
//! ## Features
//!
//! - **Trimming**: strips surrounding whitespace from every line
//! - **Length filtering**: keeps words of at least three characters
//! - **Alphabet filtering**: keeps words made up solely of the 26 ASCII letters
//! - **Normalization**: emits survivors uppercased, one per line, in source order
//! - **Encoding tolerance**: automatic detection and transcoding of common encodings
//!
//! ## Usage
//!
//! ```bash
//! # Sieve a raw list into usable_words.txt
//! word-sieve -i short_words.txt
//!
//! # Explicit output path, script-friendly
//! word-sieve -i short_words.txt -o clean.txt -q
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use word_sieve::processor::{Processor, ProcessorConfig};
//! use std::path::PathBuf;
//!
//! let config = ProcessorConfig {
//!     input: PathBuf::from("short_words.txt"),
//!     output: PathBuf::from("usable_words.txt"),
//!     buffer_size: 1024 * 1024,
//!     dry_run: false,
//!     quiet: false,
//!     verbose: false,
//! };
//!
//! let mut processor = Processor::new(config);
//! // processor.process().unwrap();
//! ```

pub mod cli;
pub mod error;
pub mod filter;
pub mod output;
pub mod processor;
pub mod progress;
pub mod reader;

pub use cli::Args;
pub use error::SieveError;
pub use processor::{filter_lines, Processor, ProcessorConfig};
