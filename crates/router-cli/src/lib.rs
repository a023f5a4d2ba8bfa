//! AI Router CLI - resolve work requests to agents from the terminal.

pub mod cli;
pub mod commands;
