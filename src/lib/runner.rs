//! Parallel FASTQ validation over directory trees.
//!
//! [`validate_fastq_files_in_paths`] is the top-level entry point: it
//! discovers FASTQ files under each root, validates every file once on a
//! fixed-size worker pool, and then runs the single-threaded cross-file
//! passes (duplicate filenames, lane/read-type grouping, record-count
//! reconciliation). Duplicates and groups are scoped to one root; the same
//! filename under two independently supplied roots is not a duplicate.

use ahash::AHashMap;
use log::{debug, info};
use parking_lot::Mutex;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::ValidationIssue;
use crate::fastq;
use crate::naming::{self, FilenamePattern};
use crate::progress::ProgressTracker;

/// Discovered files for one supplied root, grouped by subdirectory.
type FilesByDirectory = BTreeMap<PathBuf, Vec<PathBuf>>;

/// The merged result of one validation run.
///
/// An empty issue list means nothing was wrong with what was checked;
/// [`files_discovered`](Self::files_discovered) tells callers whether
/// anything was checked at all. The two are deliberately independent: an
/// empty directory is "nothing to check", not an error.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Every finding, in merge order.
    pub issues: Vec<ValidationIssue>,
    /// Number of files the naming convention matched across all roots.
    pub files_discovered: usize,
}

impl ValidationReport {
    /// Renders every issue to its human-readable message, preserving order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// True when validation ran without findings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Default worker count: a quarter of the available processing units,
/// floored at one.
#[must_use]
pub fn default_worker_count() -> usize {
    let cores = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
    (cores / 4).max(1)
}

/// Validates every FASTQ file under `paths` using `threads` workers.
///
/// Each discovered file is validated exactly once; per-file issue lists are
/// merged regardless of completion order. The cross-file passes run only
/// after the pool has fully drained, because they read the record-count
/// store the workers populate. A pool-construction failure degrades to a
/// single [`ValidationIssue::Dispatch`] finding instead of propagating.
#[must_use]
pub fn validate_fastq_files_in_paths(paths: &[PathBuf], threads: usize) -> ValidationReport {
    let discovered: Vec<(PathBuf, FilesByDirectory)> = paths
        .iter()
        .map(|root| (root.clone(), naming::collect_fastq_files_by_directory(root)))
        .collect();

    let mut file_list: Vec<PathBuf> = Vec::new();
    for (root, by_directory) in &discovered {
        let count: usize = by_directory.values().map(Vec::len).sum();
        info!("Discovered {count} FASTQ file(s) under {}", root.display());
        file_list.extend(by_directory.values().flatten().cloned());
    }
    let files_discovered = file_list.len();
    let mut issues = Vec::new();

    let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool,
        Err(e) => {
            issues.push(ValidationIssue::Dispatch { message: e.to_string() });
            return ValidationReport { issues, files_discovered };
        }
    };
    info!("Validating {files_discovered} file(s) with {threads} worker(s)");

    let record_counts: Mutex<AHashMap<PathBuf, u64>> = Mutex::new(AHashMap::new());
    let progress = ProgressTracker::new("Validated FASTQ files").with_interval(100);

    let per_file: Vec<Vec<ValidationIssue>> = pool.install(|| {
        file_list
            .par_iter()
            .map(|file| {
                let outcome = fastq::validate_fastq_file(file);
                if let Some(count) = outcome.line_count {
                    record_counts.lock().insert(file.clone(), count);
                }
                progress.log_if_needed(1);
                outcome.issues
            })
            .collect()
    });
    // `install` returning is the barrier: every worker has finished, so the
    // record-count store is complete before reconciliation reads it.
    progress.log_final();
    issues.extend(per_file.into_iter().flatten());

    let record_counts = record_counts.into_inner();
    for (root, by_directory) in &discovered {
        issues.extend(find_duplicates(root, by_directory));
        issues.extend(reconcile_group_counts(root, by_directory, &record_counts));
    }

    ValidationReport { issues, files_discovered }
}

/// Reports filenames appearing under more than one subdirectory of `root`.
fn find_duplicates(root: &Path, by_directory: &FilesByDirectory) -> Vec<ValidationIssue> {
    let mut locations: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for (sub_directory, files) in by_directory {
        for file in files {
            let Some(filename) = file.file_name() else { continue };
            locations
                .entry(filename.to_string_lossy().into_owned())
                .or_default()
                .push(root.join(sub_directory));
        }
    }

    locations
        .into_iter()
        .filter(|(_, dirs)| dirs.len() > 1)
        .map(|(filename, dirs)| ValidationIssue::DuplicateFilename { filename, locations: dirs })
        .collect()
}

/// Buckets `root`'s files by [`FilenamePattern`] and reports groups whose
/// recorded line counts disagree. Files without a pattern, without a count
/// entry (per-file I/O failure), or alone in their group are left ungrouped
/// and never reported.
fn reconcile_group_counts(
    root: &Path,
    by_directory: &FilesByDirectory,
    record_counts: &AHashMap<PathBuf, u64>,
) -> Vec<ValidationIssue> {
    let mut groups: BTreeMap<FilenamePattern, Vec<(PathBuf, u64)>> = BTreeMap::new();
    let mut ungrouped: Vec<PathBuf> = Vec::new();

    for file in by_directory.values().flatten() {
        let Some(filename) = file.file_name() else { continue };
        match naming::filename_pattern(&filename.to_string_lossy()) {
            Some(pattern) => {
                if let Some(&count) = record_counts.get(file) {
                    groups.entry(pattern).or_default().push((file.clone(), count));
                }
                // A file that failed validation has no count and cannot be
                // compared; its own issue was already reported.
            }
            None => ungrouped.push(file.clone()),
        }
    }

    let mut issues = Vec::new();
    for (pattern, members) in groups {
        if members.len() < 2 {
            // No counterpart to compare against.
            debug!("Pattern {pattern} matched a single file; skipping reconciliation");
            ungrouped.extend(members.into_iter().map(|(path, _)| path));
            continue;
        }
        let first = members[0].1;
        if members.iter().any(|&(_, count)| count != first) {
            issues.push(ValidationIssue::GroupCountMismatch { pattern, counts: members });
        }
    }

    if !ungrouped.is_empty() {
        info!(
            "{} file(s) under {} not grouped for count reconciliation",
            ungrouped.len(),
            root.display()
        );
        for file in ungrouped {
            debug!("Ungrouped: {}", file.display());
        }
    }
    issues
}
