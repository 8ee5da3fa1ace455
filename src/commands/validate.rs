//! Validate FASTQ files for structure and cross-file consistency.
//!
//! Walks the supplied dataset roots, validates every FASTQ-named file on a
//! worker pool, and reports record-syntax defects, envelope damage,
//! duplicate filenames, and record-count mismatches between lane mates.

use anyhow::{bail, ensure, Result};
use clap::Parser;
use fqcheck_lib::logging::OperationTimer;
use fqcheck_lib::runner::{default_worker_count, validate_fastq_files_in_paths};
use log::info;
use std::path::PathBuf;

use crate::commands::command::Command;

/// Validate FASTQ files for structure and cross-file consistency.
#[derive(Debug, Parser)]
#[command(
    name = "validate",
    about = "\x1b[38;5;72m[FASTQ]\x1b[0m  \x1b[36mValidate FASTQ files for structure and consistency\x1b[0m",
    long_about = r#"
Validate FASTQ files under one or more dataset roots.

Every file matching the FASTQ naming convention (.fastq, .fq, optionally
.gz) is streamed through the 4-line record checks. After all files are
validated, filenames duplicated across a root's subdirectories and
record-count mismatches between lane mates (R1/R2/..., I1/I2/...) are
reported. Findings are printed to stdout, one per line; the exit status is
nonzero when anything was found.

EXAMPLES:

  # Validate one dataset with the default worker count
  fqcheck validate /data/upload-1234

  # Validate two roots with 8 workers
  fqcheck validate -t 8 /data/upload-1234 /data/upload-5678
"#
)]
pub struct Validate {
    /// Dataset root directories to validate.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Number of worker threads [default: 1/4 of available cores, min 1].
    #[arg(short = 't', long = "threads")]
    pub threads: Option<usize>,
}

impl Command for Validate {
    fn execute(&self, _command_line: &str) -> Result<()> {
        ensure!(self.threads != Some(0), "--threads must be at least 1");
        for path in &self.paths {
            ensure!(path.exists(), "Path does not exist: {}", path.display());
        }
        let threads = self.threads.unwrap_or_else(default_worker_count);

        info!("Paths: {:?}", self.paths);
        info!("Threads: {threads}");

        let timer = OperationTimer::new("Validating FASTQ files");
        let report = validate_fastq_files_in_paths(&self.paths, threads);
        timer.log_completion(report.files_discovered as u64);

        if report.files_discovered == 0 {
            info!("No FASTQ files found under the supplied paths");
        }
        for error in report.errors() {
            println!("{error}");
        }

        if report.is_clean() {
            Ok(())
        } else {
            bail!("FASTQ validation found {} error(s)", report.issues.len());
        }
    }
}
