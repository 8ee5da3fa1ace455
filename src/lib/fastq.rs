//! Per-file FASTQ validation.
//!
//! A file is validated start to finish by one worker: the filename gate runs
//! first (a rejected name is never opened), then the file is streamed line by
//! line through the [`RecordChecker`](crate::record::RecordChecker),
//! decompressing transparently when the name ends in `.gz`. Every failure is
//! terminal for that file only and surfaces as a
//! [`ValidationIssue`](crate::errors::ValidationIssue) rather than an error.

use flate2::read::MultiGzDecoder;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use crate::errors::ValidationIssue;
use crate::naming;
use crate::record::RecordChecker;

/// The result of validating one file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Every issue found, in stream order.
    pub issues: Vec<ValidationIssue>,
    /// Number of lines streamed, or `None` when the file was never
    /// successfully streamed to its end (bad name, unopenable, corrupt or
    /// truncated gzip). An empty file counts as successfully streamed and
    /// reports `Some(0)`.
    pub line_count: Option<u64>,
}

impl FileOutcome {
    fn failed(issues: Vec<ValidationIssue>) -> Self {
        Self { issues, line_count: None }
    }
}

/// Opens `path` for line streaming, stacking a gzip decoder when the name
/// ends in `.gz`. Multi-member gzip streams are read through all members.
fn open_fastq_reader(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(BufReader::new(file)))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Maps a mid-stream I/O failure to its issue kind. The gzip decoder reports
/// corrupt headers and corrupt deflate data as `InvalidInput`/`InvalidData`,
/// and a truncated member as `UnexpectedEof`.
fn stream_issue(error: &io::Error, path: &Path) -> ValidationIssue {
    match error.kind() {
        ErrorKind::UnexpectedEof => ValidationIssue::UnexpectedEof { path: path.to_path_buf() },
        ErrorKind::InvalidInput | ErrorKind::InvalidData => {
            ValidationIssue::BadGzip { path: path.to_path_buf() }
        }
        _ => ValidationIssue::Unexpected { message: error.to_string(), path: path.to_path_buf() },
    }
}

/// Validates a single FASTQ file.
///
/// Returns all issues found in the file plus the streamed line count. Never
/// returns an `Err`: per-file failures are findings, not errors, so one bad
/// file cannot abort a batch.
#[must_use]
pub fn validate_fastq_file(path: &Path) -> FileOutcome {
    debug!("Validating {}", path.display());

    let filename = path.file_name().map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    if !naming::is_fastq_filename(&filename) {
        // A name outside the convention is not worth opening.
        return FileOutcome::failed(vec![ValidationIssue::FilenameInvalid {
            path: path.to_path_buf(),
        }]);
    }

    let mut reader = match open_fastq_reader(path) {
        Ok(reader) => reader,
        Err(_) => {
            return FileOutcome::failed(vec![ValidationIssue::Unopenable {
                path: path.to_path_buf(),
            }]);
        }
    };

    let mut checker = RecordChecker::new();
    let mut issues = Vec::new();
    let mut line_index: u64 = 0;
    let mut line = Vec::with_capacity(256);

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {
                trim_line_end(&mut line);
                for detail in checker.check_line(line_index, &line) {
                    issues.push(ValidationIssue::RecordSyntax {
                        filename: filename.clone(),
                        line: line_index + 1,
                        detail,
                    });
                }
                line_index += 1;
            }
            Err(e) => {
                issues.push(stream_issue(&e, path));
                return FileOutcome { issues, line_count: None };
            }
        }
    }

    if line_index == 0 {
        issues.push(ValidationIssue::EmptyFile { path: path.to_path_buf() });
    }
    FileOutcome { issues, line_count: Some(line_index) }
}

/// Strips the line terminator and any trailing whitespace, so CRLF input and
/// incidental trailing blanks do not trip the character or length checks.
fn trim_line_end(line: &mut Vec<u8>) {
    while matches!(line.last(), Some(b'\n' | b'\r' | b' ' | b'\t')) {
        line.pop();
    }
}

/// Fully drains `reader`, returning the I/O error that stopped it, if any.
/// Used by the gzip integrity scan, which cares only about decodability.
pub(crate) fn drain_reader<R: Read>(reader: &mut R) -> io::Result<()> {
    // 1 MiB chunks: large enough to amortize decoder calls, small enough to
    // keep per-worker memory bounded.
    let mut buffer = vec![0u8; 1024 * 1024];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => return Ok(()),
            Ok(_) => {}
            Err(e) => return Err(e),
        }
    }
}
