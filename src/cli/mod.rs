//! CLI layer: argument parsing, command dispatch and terminal output

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Cli, Commands};
pub use commands::execute_command;
