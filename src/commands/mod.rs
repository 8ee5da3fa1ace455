//! CLI command implementations for fqcheck.
//!
//! Each submodule implements one subcommand:
//!
//! - [`validate`] - FASTQ structural and cross-file consistency validation
//! - [`gzcheck`] - gzip archive-integrity scan

pub mod command;
pub mod gzcheck;
pub mod validate;
