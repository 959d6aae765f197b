//! Command handler modules for the noughts CLI.
//!
//! One module per subcommand, each with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Dependency injection: output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation via the `CliError` enum; rejected moves are
//!   recovered locally and are not errors

mod cfg;
mod move_cmd;
mod play;
mod rename;
mod reset;
mod state;

pub use cfg::handle_cfg_command;
pub use move_cmd::handle_move_command;
pub use play::handle_play_command;
pub use rename::handle_rename_command;
pub use reset::handle_reset_command;
pub use state::handle_state_command;
