//! Gzip archive integrity scanning.
//!
//! Recursively finds `.gz` files under each root and fully decompresses each
//! one, reporting archives that fail anywhere between header and trailer.
//! FASTQ archives (`.fastq.gz`, `.fq.gz`) are excluded: the FASTQ validator
//! already reads those end to end and reports envelope damage itself.

use flate2::read::MultiGzDecoder;
use log::info;
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::ValidationIssue;
use crate::fastq::drain_reader;
use crate::naming;
use crate::runner::ValidationReport;

/// Collects `.gz` files under `root`, skipping FASTQ archives, sorted for
/// deterministic iteration.
fn collect_gzipped_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            name.ends_with(".gz") && !naming::is_fastq_filename(&name)
        })
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

/// Decompresses `path` end to end, returning an issue when any part of the
/// stream is unreadable. Content is discarded; only decodability matters.
fn check_gzip_file(path: &Path) -> Option<ValidationIssue> {
    let open_and_drain = || -> std::io::Result<()> {
        let file = File::open(path)?;
        let mut decoder = MultiGzDecoder::new(BufReader::new(file));
        drain_reader(&mut decoder)
    };
    open_and_drain()
        .err()
        .map(|_| ValidationIssue::CorruptGzipArchive { path: path.to_path_buf() })
}

/// Scans every non-FASTQ `.gz` file under `paths` for archive damage using
/// `threads` workers. Mirrors the FASTQ runner's dispatch contract: each file
/// checked once, findings merged in any order, pool-construction failure
/// degraded to a single [`ValidationIssue::Dispatch`] finding.
#[must_use]
pub fn scan_gzipped_files_in_paths(paths: &[PathBuf], threads: usize) -> ValidationReport {
    let mut file_list: Vec<PathBuf> = Vec::new();
    for root in paths {
        let files = collect_gzipped_files(root);
        info!("Discovered {} gzipped file(s) under {}", files.len(), root.display());
        file_list.extend(files);
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
    info!("Checking {files_discovered} file(s) with {threads} worker(s)");

    issues.extend(
        pool.install(|| {
            file_list.par_iter().filter_map(|file| check_gzip_file(file)).collect::<Vec<_>>()
        }),
    );

    ValidationReport { issues, files_discovered }
}
