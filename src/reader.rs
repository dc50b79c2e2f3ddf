//! Input reading with encoding tolerance.
//!
//! Word lists come out of many tools in many encodings. This module sniffs
//! the encoding (BOM first, content heuristics second) and hands every
//! line to the filter as UTF-8.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::SieveError;

/// Sample size for encoding detection
const DETECT_SAMPLE_SIZE: usize = 8 * 1024;

/// Detect the encoding of a file by sampling its head.
pub fn detect_encoding(path: &Path) -> Result<&'static Encoding, SieveError> {
    let file = File::open(path).map_err(|source| SieveError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut sample = vec![0u8; DETECT_SAMPLE_SIZE];
    let bytes_read = reader
        .read(&mut sample)
        .map_err(|source| SieveError::InputReadFailure {
            path: path.to_path_buf(),
            source,
        })?;
    sample.truncate(bytes_read);

    if bytes_read == 0 {
        return Ok(encoding_rs::UTF_8);
    }

    if let Some(encoding) = detect_bom(&sample) {
        return Ok(encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&sample, true);

    Ok(detector.guess(None, true))
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.len() >= 3 && content[0..3] == [0xEF, 0xBB, 0xBF] {
        return Some(encoding_rs::UTF_8);
    }
    if content.len() >= 2 {
        if content[0..2] == [0xFE, 0xFF] {
            return Some(encoding_rs::UTF_16BE);
        }
        if content[0..2] == [0xFF, 0xFE] {
            return Some(encoding_rs::UTF_16LE);
        }
    }
    None
}

/// Line iterator over the input word list.
///
/// ASCII-compatible input (UTF-8, the windows-* family) is streamed line
/// by line. Wide encodings such as UTF-16 are transcoded in one shot and
/// iterated as decoded lines; byte-oriented line splitting is not
/// meaningful for them, and the input fits in memory.
#[derive(Debug)]
pub struct WordSource {
    path: PathBuf,
    mode: Mode,
}

#[derive(Debug)]
enum Mode {
    Stream {
        reader: BufReader<File>,
        encoding: &'static Encoding,
        line_buf: Vec<u8>,
        at_start: bool,
    },
    Transcoded {
        lines: std::vec::IntoIter<String>,
    },
}

impl WordSource {
    /// Open a word list with automatic encoding detection.
    pub fn open(path: &Path) -> Result<Self, SieveError> {
        let encoding = detect_encoding(path)?;
        log::debug!("detected encoding {} for {:?}", encoding.name(), path);

        let mode = if encoding.is_ascii_compatible() {
            let file = File::open(path).map_err(|source| SieveError::InputNotFound {
                path: path.to_path_buf(),
                source,
            })?;

            Mode::Stream {
                reader: BufReader::with_capacity(64 * 1024, file),
                encoding,
                line_buf: Vec::with_capacity(256),
                at_start: true,
            }
        } else {
            let bytes = fs::read(path).map_err(|source| SieveError::InputReadFailure {
                path: path.to_path_buf(),
                source,
            })?;

            let (text, _, had_errors) = encoding.decode(&bytes);
            if had_errors {
                log::warn!("encoding errors in {:?}, using lossy conversion", path);
            }

            let lines: Vec<String> = text.lines().map(str::to_owned).collect();

            Mode::Transcoded {
                lines: lines.into_iter(),
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            mode,
        })
    }

    fn next_streamed(&mut self) -> Option<Result<String, SieveError>> {
        let Mode::Stream {
            reader,
            encoding,
            line_buf,
            at_start,
        } = &mut self.mode
        else {
            return None;
        };

        line_buf.clear();

        match reader.read_until(b'\n', line_buf) {
            Ok(0) => None,
            Ok(_) => {
                if *at_start {
                    *at_start = false;
                    if line_buf.starts_with(&[0xEF, 0xBB, 0xBF]) {
                        line_buf.drain(..3);
                    }
                }

                while line_buf.last() == Some(&b'\n') || line_buf.last() == Some(&b'\r') {
                    line_buf.pop();
                }

                if *encoding == encoding_rs::UTF_8 {
                    // Fast path: no copy unless the line is invalid UTF-8
                    match std::str::from_utf8(line_buf) {
                        Ok(s) => Some(Ok(s.to_string())),
                        Err(_) => Some(Ok(String::from_utf8_lossy(line_buf).into_owned())),
                    }
                } else {
                    let (decoded, had_errors) = encoding.decode_without_bom_handling(line_buf);
                    if had_errors {
                        log::warn!("encoding errors in line, using lossy conversion");
                    }
                    Some(Ok(decoded.into_owned()))
                }
            }
            Err(source) => Some(Err(SieveError::InputReadFailure {
                path: self.path.clone(),
                source,
            })),
        }
    }
}

impl Iterator for WordSource {
    type Item = Result<String, SieveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Mode::Transcoded { lines } = &mut self.mode {
            return lines.next().map(Ok);
        }
        self.next_streamed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn collect_lines(path: &Path) -> Vec<String> {
        WordSource::open(path)
            .unwrap()
            .map(|r| r.unwrap())
            .collect()
    }

    #[test]
    fn test_reads_lines_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "dog").unwrap();
        writeln!(file, "bird").unwrap();

        assert_eq!(collect_lines(file.path()), vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_missing_final_newline() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "cat\ndog").unwrap();

        assert_eq!(collect_lines(file.path()), vec!["cat", "dog"]);
    }

    #[test]
    fn test_crlf_terminators_stripped() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "cat\r\ndog\r\n").unwrap();

        assert_eq!(collect_lines(file.path()), vec!["cat", "dog"]);
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFcat\ndog\n").unwrap();

        assert_eq!(collect_lines(file.path()), vec!["cat", "dog"]);
    }

    #[test]
    fn test_utf16le_input_transcoded() {
        let mut file = NamedTempFile::new().unwrap();
        let mut bytes = vec![0xFF, 0xFE];
        for unit in str::encode_utf16("cat\ndog\n") {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        file.write_all(&bytes).unwrap();

        assert_eq!(collect_lines(file.path()), vec!["cat", "dog"]);
    }

    #[test]
    fn test_empty_file_yields_no_lines() {
        let file = NamedTempFile::new().unwrap();

        assert!(collect_lines(file.path()).is_empty());
    }

    #[test]
    fn test_missing_input_is_input_not_found() {
        let err = WordSource::open(Path::new("/nonexistent/words.txt")).unwrap_err();

        assert!(matches!(err, SieveError::InputNotFound { .. }));
    }

    #[test]
    fn test_detect_bom() {
        assert_eq!(
            detect_bom(&[0xEF, 0xBB, 0xBF, b'a']),
            Some(encoding_rs::UTF_8)
        );
        assert_eq!(detect_bom(&[0xFE, 0xFF]), Some(encoding_rs::UTF_16BE));
        assert_eq!(detect_bom(&[0xFF, 0xFE]), Some(encoding_rs::UTF_16LE));
        assert_eq!(detect_bom(b"cat"), None);
    }
}
