//! FASTQ filename conventions and discovery.
//!
//! Three concerns live here: the predicate deciding whether a filename is a
//! recognized FASTQ-family name, enumeration of recognized files grouped by
//! subdirectory under a root, and extraction of the lane/read-type
//! [`FilenamePattern`] used to decide which files must agree on record count.

use log::warn;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Recognized FASTQ-family filenames: a non-empty stem followed by `.fastq`
/// or `.fq`, optionally gzip-compressed.
static FASTQ_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+\.(fastq|fq)(\.gz)?$").expect("static pattern is valid"));

/// Read marker anchored by a lane number: `<prefix>_L<digits>..._<R|I><n><suffix>`.
/// The lane anchor keeps loosely named files (`sample_R1.fastq`) out of
/// grouping, where a false match would produce spurious count comparisons.
static READ_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix>.+_L\d+.*)_(?P<read_type>[IR])\d+(?P<suffix>[._].*)$")
        .expect("static pattern is valid")
});

/// Returns true when `filename` matches the accepted FASTQ naming convention.
///
/// # Example
/// ```
/// use fqcheck_lib::naming::is_fastq_filename;
///
/// assert!(is_fastq_filename("sample_L001_R1_001.fastq.gz"));
/// assert!(is_fastq_filename("reads.fq"));
/// assert!(!is_fastq_filename("reads.txt"));
/// assert!(!is_fastq_filename(".fastq"));
/// ```
#[must_use]
pub fn is_fastq_filename(filename: &str) -> bool {
    FASTQ_FILENAME.is_match(filename)
}

/// The comparison-group key derived from a FASTQ filename.
///
/// Files sharing a pattern are mates of one lane and sequencing run (for
/// example R1/R2/R3) and must have equal record counts. The read *number* is
/// excluded from the key so mates group together; the marker letter is kept
/// so `R`-series and `I`-series files reconcile separately.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilenamePattern {
    /// Text before the read marker, containing the lane anchor.
    pub prefix: String,
    /// The read marker letter, `R` or `I`.
    pub read_type: char,
    /// Text after the read number, starting with `.` or `_`.
    pub suffix: String,
}

impl fmt::Display for FilenamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}*{}", self.prefix, self.read_type, self.suffix)
    }
}

/// Extracts the [`FilenamePattern`] from a filename, or `None` when the name
/// lacks the lane + read-type anchor. Files without a pattern are still
/// validated individually; they are only excluded from count reconciliation.
///
/// # Example
/// ```
/// use fqcheck_lib::naming::filename_pattern;
///
/// let r1 = filename_pattern("X_L001_R1_001.fastq").unwrap();
/// let r2 = filename_pattern("X_L001_R2_001.fastq").unwrap();
/// assert_eq!(r1, r2);
/// assert!(filename_pattern("unanchored.fastq").is_none());
/// ```
#[must_use]
pub fn filename_pattern(filename: &str) -> Option<FilenamePattern> {
    let captures = READ_MARKER.captures(filename)?;
    let read_type = captures.name("read_type")?.as_str().chars().next()?;
    Some(FilenamePattern {
        prefix: captures.name("prefix")?.as_str().to_string(),
        read_type,
        suffix: captures.name("suffix")?.as_str().to_string(),
    })
}

/// Walks `root` and returns every recognized FASTQ file, grouped by the
/// containing directory's path relative to `root` and sorted for
/// deterministic iteration. Values are full paths to the files themselves.
///
/// Unreadable directory entries are logged and skipped; a missing root yields
/// an empty map.
#[must_use]
pub fn collect_fastq_files_by_directory(root: &Path) -> BTreeMap<PathBuf, Vec<PathBuf>> {
    let mut by_directory: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(filename) = entry.file_name().to_str() else {
            warn!("Skipping non-unicode filename under {}", root.display());
            continue;
        };
        if !is_fastq_filename(filename) {
            continue;
        }

        let directory = entry
            .path()
            .parent()
            .and_then(|parent| parent.strip_prefix(root).ok())
            .map_or_else(PathBuf::new, Path::to_path_buf);
        by_directory.entry(directory).or_default().push(entry.path().to_path_buf());
    }

    by_directory
}
