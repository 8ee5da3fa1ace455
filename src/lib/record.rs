//! Line-level FASTQ record validation.
//!
//! FASTQ files cycle through four line kinds:
//!
//! 1. a header beginning with `@`,
//! 2. the raw sequence bases,
//! 3. a separator beginning with `+`,
//! 4. quality values, one symbol per sequence base.
//!
//! [`RecordChecker`] validates a stream one line at a time, keyed purely by
//! the absolute line index modulo 4. There is no reset between records and no
//! end-of-stream handling: a truncated final record simply leaves its missing
//! lines unchecked.

use crate::errors::RecordIssue;

/// Bases accepted on a sequence line. Uppercase only.
const VALID_SEQUENCE_BASES: &[u8] = b"ACGNT";

/// Inclusive bounds of the Phred+33 quality alphabet (printable ASCII,
/// excluding space and DEL).
const QUALITY_MIN: u8 = 33;
const QUALITY_MAX: u8 = 126;

/// Stateful validator for the 4-line record cycle.
///
/// The only state carried across lines is the most recent sequence line's
/// length and position, needed to check the matching quality line.
///
/// # Example
/// ```
/// use fqcheck_lib::record::RecordChecker;
///
/// let mut checker = RecordChecker::new();
/// assert!(checker.check_line(0, b"@SEQ_ID").is_empty());
/// assert!(checker.check_line(1, b"ACGTACGT").is_empty());
/// assert!(checker.check_line(2, b"+").is_empty());
/// assert!(checker.check_line(3, b"IIIIIIII").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordChecker {
    sequence_length: usize,
    sequence_line: u64,
}

impl RecordChecker {
    /// Creates a checker positioned before the first line of a stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates one line. `line_index` is the zero-based absolute index of
    /// the line within the stream; `line` is the line content without its
    /// terminator.
    ///
    /// Returns every defect found on the line, in order. Most line kinds can
    /// produce at most one issue; a quality line can produce two (bad
    /// characters and a length mismatch).
    pub fn check_line(&mut self, line_index: u64, line: &[u8]) -> Vec<RecordIssue> {
        match line_index % 4 {
            0 => Self::check_header(line).into_iter().collect(),
            1 => self.check_sequence(line_index, line).into_iter().collect(),
            2 => Self::check_separator(line).into_iter().collect(),
            _ => self.check_quality(line),
        }
    }

    fn check_header(line: &[u8]) -> Option<RecordIssue> {
        if line.first() == Some(&b'@') { None } else { Some(RecordIssue::MissingHeaderPrefix) }
    }

    fn check_sequence(&mut self, line_index: u64, line: &[u8]) -> Option<RecordIssue> {
        self.sequence_length = line.len();
        self.sequence_line = line_index + 1;

        let invalid: Vec<u8> =
            line.iter().copied().filter(|b| !VALID_SEQUENCE_BASES.contains(b)).collect();
        if invalid.is_empty() {
            None
        } else {
            Some(RecordIssue::InvalidSequenceChars {
                found: String::from_utf8_lossy(&invalid).into_owned(),
            })
        }
    }

    fn check_separator(line: &[u8]) -> Option<RecordIssue> {
        if line.first() == Some(&b'+') { None } else { Some(RecordIssue::MissingPlusPrefix) }
    }

    fn check_quality(&self, line: &[u8]) -> Vec<RecordIssue> {
        let mut issues = Vec::new();

        let invalid: Vec<u8> =
            line.iter().copied().filter(|&b| !(QUALITY_MIN..=QUALITY_MAX).contains(&b)).collect();
        if !invalid.is_empty() {
            issues.push(RecordIssue::InvalidQualityChars {
                found: String::from_utf8_lossy(&invalid).into_owned(),
            });
        }

        if line.len() != self.sequence_length {
            issues.push(RecordIssue::QualityLengthMismatch {
                length: line.len(),
                sequence_line: self.sequence_line,
                sequence_length: self.sequence_length,
            });
        }

        issues
    }
}
