//! Stable exit codes for the todo server process.

/// Process shut down normally.
pub const OK: i32 = 0;
/// The data file could not be read or parsed, or the listener could not bind.
pub const STARTUP_FAILED: i32 = 1;
/// Invalid command-line usage (reported by clap).
pub const USAGE: i32 = 2;
