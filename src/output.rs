//! Output management module
//!
//! Handles writing accepted words to the output file with buffering.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::SieveError;

/// Buffered writer for the output word list.
///
/// The target is truncated on creation and its parent directory is
/// created if absent.
#[derive(Debug)]
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create a new output writer, truncating any existing file.
    pub fn create(path: &Path, buffer_size: usize) -> Result<Self, SieveError> {
        let write_err = |source| SieveError::OutputWriteFailure {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(write_err)?;

        Ok(Self {
            writer: BufWriter::with_capacity(buffer_size, file),
            path: path.to_path_buf(),
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Write one word as a newline-terminated line.
    pub fn write_line(&mut self, line: &str) -> Result<(), SieveError> {
        writeln!(self.writer, "{}", line).map_err(|source| SieveError::OutputWriteFailure {
            path: self.path.clone(),
            source,
        })?;

        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1;
        Ok(())
    }

    /// Flush the buffer to disk.
    pub fn flush(&mut self) -> Result<(), SieveError> {
        self.writer
            .flush()
            .map_err(|source| SieveError::OutputWriteFailure {
                path: self.path.clone(),
                source,
            })
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_lines_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let mut writer = OutputWriter::create(&path, 1024).unwrap();
        writer.write_line("CAT").unwrap();
        writer.write_line("DOG").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.lines_written(), 2);
        assert_eq!(writer.bytes_written(), 8);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "CAT\nDOG\n");
    }

    #[test]
    fn test_truncates_between_runs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        {
            let mut writer = OutputWriter::create(&path, 1024).unwrap();
            writer.write_line("STALE").unwrap();
            writer.write_line("CONTENT").unwrap();
        }
        {
            let mut writer = OutputWriter::create(&path, 1024).unwrap();
            writer.write_line("FRESH").unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "FRESH\n");
    }

    #[test]
    fn test_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/out.txt");

        let mut writer = OutputWriter::create(&path, 1024).unwrap();
        writer.write_line("CAT").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "CAT\n");
    }

    #[test]
    fn test_flushes_on_drop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        {
            let mut writer = OutputWriter::create(&path, 1024 * 1024).unwrap();
            writer.write_line("CAT").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "CAT\n");
    }

    #[test]
    fn test_unwritable_target_is_output_write_failure() {
        let temp_dir = TempDir::new().unwrap();

        let err = OutputWriter::create(temp_dir.path(), 1024).unwrap_err();

        assert!(matches!(err, SieveError::OutputWriteFailure { .. }));
    }
}
