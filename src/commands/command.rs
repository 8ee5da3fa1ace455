//! Command trait definition for CLI commands.
//!
//! Every fqcheck subcommand implements [`Command`]; `enum_dispatch` routes
//! the parsed subcommand to its implementation without dynamic dispatch.

use anyhow::Result;
use enum_dispatch::enum_dispatch;

/// Trait implemented by all fqcheck CLI commands.
///
/// `command_line` carries the full invocation for logging.
#[enum_dispatch]
pub trait Command {
    #[allow(clippy::missing_errors_doc)]
    fn execute(&self, command_line: &str) -> Result<()>;
}
