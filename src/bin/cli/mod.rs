//! CLI module organization:
//! - args: argument structures and command enum
//! - commands: command execution logic

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
