//! Integration tests for the gz command.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use tempfile::TempDir;

use crate::helpers::{run_fqcheck, stdout_of};

#[test]
fn test_gz_clean_tree_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let file = fs::File::create(tmp.path().join("notes.txt.gz")).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(b"some notes").unwrap();
    encoder.finish().unwrap();

    let output = run_fqcheck(&["gz", tmp.path().to_str().unwrap()]);

    assert!(output.status.success(), "stdout: {}", stdout_of(&output));
}

#[test]
fn test_gz_damaged_archive_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("broken.txt.gz"), b"this is not gzip data").unwrap();

    let output = run_fqcheck(&["gz", "-t", "2", tmp.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("broken.txt.gz is not a valid gzipped file"));
}

#[test]
fn test_gz_skips_fastq_archives() {
    let tmp = TempDir::new().unwrap();
    // Damaged but FASTQ-named: owned by `fqcheck validate`, not the scanner.
    fs::write(tmp.path().join("reads.fastq.gz"), b"junk").unwrap();

    let output = run_fqcheck(&["gz", tmp.path().to_str().unwrap()]);

    assert!(output.status.success(), "stdout: {}", stdout_of(&output));
}

#[test]
fn test_gz_empty_directory_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let output = run_fqcheck(&["gz", tmp.path().to_str().unwrap()]);
    assert!(output.status.success());
}
