//! Integration tests for fqcheck.
//!
//! These tests drive the compiled binary over temporary dataset trees and
//! validate end-to-end behavior: discovery, parallel validation, the
//! cross-file consistency passes, and exit-status contracts.

mod helpers;
mod test_gz_command;
mod test_validate_command;
