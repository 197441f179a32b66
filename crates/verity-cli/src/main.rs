//! Verity CLI - string validation API and command-line checker.

use clap::Parser;
use verity_cli::cli::{Cli, Commands};
use verity_cli::commands;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            host,
            mock_llm,
        } => commands::serve::run(host, port, mock_llm, cli.verbose),

        Commands::Check {
            operation,
            value,
            arg,
            json,
        } => commands::check::run(operation, value, arg, json),

        Commands::Ops { json } => commands::ops::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
