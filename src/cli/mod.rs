//! Presentation layer: command implementations, dispatch, and the REPL.

pub mod commands;
pub mod repl;
pub mod repl_commands;
pub mod repl_complete;
