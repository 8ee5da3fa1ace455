//! Structured validation findings.
//!
//! Every problem the validators can detect is a variant of [`ValidationIssue`]
//! carrying structured fields; the human-readable message is produced only by
//! the `Display` impl. Callers that need to distinguish issue kinds match on
//! the enum instead of pattern-matching message text.

use std::path::PathBuf;
use thiserror::Error;

use crate::naming::FilenamePattern;

/// A defect found on a single line of a FASTQ record cycle.
///
/// Rendered without location context; [`ValidationIssue::RecordSyntax`] adds
/// the `filename:line:` prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordIssue {
    /// The header line is empty or does not start with `@`.
    #[error("Line does not begin with '@'.")]
    MissingHeaderPrefix,

    /// The sequence line contains bases outside A, C, G, N, T.
    #[error("Line contains invalid character(s): {found}")]
    InvalidSequenceChars {
        /// The offending characters, verbatim and in order of appearance.
        found: String,
    },

    /// The separator line is empty or does not start with `+`.
    #[error("Line does not begin with '+'.")]
    MissingPlusPrefix,

    /// The quality line contains characters outside the printable ASCII
    /// range `[33,126]`.
    #[error("Line contains invalid quality character(s): \"{found}\"")]
    InvalidQualityChars {
        /// The offending characters, verbatim and in order of appearance.
        found: String,
    },

    /// The quality line length differs from the preceding sequence line.
    #[error(
        "Line contains {length} characters which does not match \
         line {sequence_line}'s {sequence_length} characters."
    )]
    QualityLengthMismatch {
        /// Length of the quality line.
        length: usize,
        /// 1-based number of the sequence line it must match.
        sequence_line: u64,
        /// Length of that sequence line.
        sequence_length: usize,
    },
}

/// A finding produced by FASTQ validation or the gzip integrity scan.
///
/// Issues are data, not propagated errors: per-file failures never abort the
/// batch, and all findings are merged into one report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The filename does not match the FASTQ naming convention; the file is
    /// skipped without being opened.
    #[error("Filename does not have proper format and will not be processed")]
    FilenameInvalid {
        /// The rejected file.
        path: PathBuf,
    },

    /// The gzip envelope of a `.gz` FASTQ file is corrupt.
    #[error("Bad gzip file: {}.", .path.display())]
    BadGzip {
        /// The unreadable file.
        path: PathBuf,
    },

    /// The file could not be opened (permissions, vanished between discovery
    /// and validation).
    #[error("Unable to open FASTQ data file {}.", .path.display())]
    Unopenable {
        /// The unreadable file.
        path: PathBuf,
    },

    /// The compressed stream ended before the decoder expected it to.
    #[error("EOF in FASTQ data file {}.", .path.display())]
    UnexpectedEof {
        /// The truncated file.
        path: PathBuf,
    },

    /// The file was opened and streamed successfully but contains no lines.
    #[error("Fastq file {} is empty.", .path.display())]
    EmptyFile {
        /// The empty file.
        path: PathBuf,
    },

    /// Any other I/O failure while streaming the file.
    #[error("Unexpected error: {message} on data file {}.", .path.display())]
    Unexpected {
        /// The underlying error text.
        message: String,
        /// The file being streamed when it occurred.
        path: PathBuf,
    },

    /// A malformed line within the 4-line record cycle.
    #[error("{filename}:{line}: {detail}")]
    RecordSyntax {
        /// Bare filename of the offending file.
        filename: String,
        /// 1-based line number.
        line: u64,
        /// The line-level defect.
        detail: RecordIssue,
    },

    /// The same filename appears under more than one subdirectory of a
    /// single root.
    #[error(
        "{filename} has been found multiple times during this validation. \
         Locations of duplicates: {}.",
        format_paths(.locations)
    )]
    DuplicateFilename {
        /// The repeated bare filename.
        filename: String,
        /// The directories it was found in.
        locations: Vec<PathBuf>,
    },

    /// Files sharing a lane/read-type naming pattern disagree on line count.
    #[error(
        "Counts do not match among files matching pattern {pattern}: {}.",
        format_counts(.counts)
    )]
    GroupCountMismatch {
        /// The shared naming pattern.
        pattern: FilenamePattern,
        /// Every group member with its recorded line count.
        counts: Vec<(PathBuf, u64)>,
    },

    /// A `.gz` archive that fails to decompress end to end.
    #[error("{} is not a valid gzipped file", .path.display())]
    CorruptGzipArchive {
        /// The damaged archive.
        path: PathBuf,
    },

    /// The worker pool could not be constructed or driven; validation
    /// degrades to whatever was collected before the failure.
    #[error("Unable to dispatch validation workers: {message}")]
    Dispatch {
        /// The underlying error text.
        message: String,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    let rendered: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

fn format_counts(counts: &[(PathBuf, u64)]) -> String {
    let rendered: Vec<String> =
        counts.iter().map(|(path, count)| format!("{}: {count}", path.display())).collect();
    format!("{{{}}}", rendered.join(", "))
}
