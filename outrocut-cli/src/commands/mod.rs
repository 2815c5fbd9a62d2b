//! Command implementations for the CLI.

/// Detects the outro of one video and writes the trimmed copy.
pub mod trim;
