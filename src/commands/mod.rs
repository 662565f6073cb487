mod handlers;
mod parser;

pub use handlers::{handle_command, run_session};
pub use parser::{Command, CommandResult, parse_command};
