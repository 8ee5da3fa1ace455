//! Check gzipped files for archive damage.

use anyhow::{bail, ensure, Result};
use clap::Parser;
use fqcheck_lib::gzip::scan_gzipped_files_in_paths;
use fqcheck_lib::logging::OperationTimer;
use fqcheck_lib::runner::default_worker_count;
use log::info;
use std::path::PathBuf;

use crate::commands::command::Command;

/// Check gzipped files for archive damage.
#[derive(Debug, Parser)]
#[command(
    name = "gz",
    about = "\x1b[38;5;72m[ARCHIVE]\x1b[0m \x1b[36mCheck gzipped files for damage\x1b[0m",
    long_about = r#"
Recursively check .gz files under one or more dataset roots for archive
damage by decompressing each file end to end.

FASTQ archives (.fastq.gz, .fq.gz) are skipped; `fqcheck validate` already
reads those in full and reports envelope problems itself.

EXAMPLES:

  # Check one dataset
  fqcheck gz /data/upload-1234

  # Check two roots with 8 workers
  fqcheck gz -t 8 /data/upload-1234 /data/upload-5678
"#
)]
pub struct GzCheck {
    /// Dataset root directories to scan.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Number of worker threads [default: 1/4 of available cores, min 1].
    #[arg(short = 't', long = "threads")]
    pub threads: Option<usize>,
}

impl Command for GzCheck {
    fn execute(&self, _command_line: &str) -> Result<()> {
        ensure!(self.threads != Some(0), "--threads must be at least 1");
        for path in &self.paths {
            ensure!(path.exists(), "Path does not exist: {}", path.display());
        }
        let threads = self.threads.unwrap_or_else(default_worker_count);

        info!("Paths: {:?}", self.paths);
        info!("Threads: {threads}");

        let timer = OperationTimer::new("Checking gzipped files");
        let report = scan_gzipped_files_in_paths(&self.paths, threads);
        timer.log_completion(report.files_discovered as u64);

        if report.files_discovered == 0 {
            info!("No gzipped files found under the supplied paths");
        }
        for error in report.errors() {
            println!("{error}");
        }

        if report.is_clean() {
            Ok(())
        } else {
            bail!("Gzip integrity check found {} error(s)", report.issues.len());
        }
    }
}
