//! CLI and HTTP API for the Verity string validation library.

pub mod cli;
pub mod commands;
pub mod server;
