//! Command trait for the kdlt CLI.
//!
//! This module defines the standard command trait that all commands
//! implement to ensure consistency across the application.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all kdlt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance from its arguments and the loaded
    /// configuration. Arguments given on the command line win.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
