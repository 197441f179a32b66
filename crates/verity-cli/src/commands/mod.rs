//! CLI subcommand implementations.

pub mod check;
pub mod ops;
pub mod serve;
