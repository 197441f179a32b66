//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};

/// Verity: string validation and transformation API
#[derive(Parser)]
#[command(name = "verity")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP validation API
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Use the mock LLM provider for isField (no API key needed)
        #[arg(long)]
        mock_llm: bool,
    },

    /// Run one operation against one value
    Check {
        /// Operation name (e.g. "isEmailAddress", "onlyNumbers")
        #[arg(value_name = "OPERATION")]
        operation: String,

        /// The subject value
        #[arg(value_name = "VALUE")]
        value: String,

        /// Extra operation arguments as key=value (e.g. countryCode=US)
        #[arg(short, long, value_name = "KEY=VALUE")]
        arg: Vec<String>,

        /// Emit the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all registered operations
    Ops {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
}
