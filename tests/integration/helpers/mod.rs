//! Shared fixtures for integration tests.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Output;

/// One well-formed 4-line FASTQ record.
pub const GOOD_RECORD: &str = "@A12345:123:A12BCDEFG:1:1234:1000:1234 1:N:0:NACTGACTGA+CTGACTGACT\n\
                               NACTGACTGA\n\
                               +\n\
                               #FFFFFFFFF\n";

/// Writes `records` well-formed records to an uncompressed FASTQ file.
pub fn write_fastq(path: &Path, records: usize) {
    fs::write(path, GOOD_RECORD.repeat(records)).expect("Failed to write FASTQ fixture");
}

/// Writes `records` well-formed records to a gzipped FASTQ file.
pub fn write_fastq_gz(path: &Path, records: usize) {
    let file = fs::File::create(path).expect("Failed to create gzipped fixture");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(GOOD_RECORD.repeat(records).as_bytes())
        .expect("Failed to write gzipped fixture");
    encoder.finish().expect("Failed to finish gzip stream");
}

/// Runs the fqcheck binary with `args`, returning the process output.
pub fn run_fqcheck(args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_fqcheck"))
        .args(args)
        .output()
        .expect("Failed to run fqcheck")
}

/// Stdout of `output` as UTF-8.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout was not UTF-8")
}
