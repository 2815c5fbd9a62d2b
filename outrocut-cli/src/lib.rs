// outrocut-cli/src/lib.rs
//
// Library portion of the outrocut CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::trim::run_trim;
pub use error::{CliErrorContext, CliResult, exit_code};
