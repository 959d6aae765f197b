//! Exit code constants for the CLI application.
//!
//! Every recognized invocation exits with [`SUCCESS`], including moves
//! the engine rejects and recovers from locally; only malformed
//! arguments and I/O or session failures exit with [`ERROR`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Malformed arguments, I/O, config, or session failure.
pub const ERROR: i32 = 2;
