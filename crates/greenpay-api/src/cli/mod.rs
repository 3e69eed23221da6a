//! CLI command definitions for the `greenpay` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// GreenPay demo site backend.
#[derive(Parser)]
#[command(name = "greenpay", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, env = "GREENPAY_CONFIG", default_value = "greenpay.toml")]
    pub config: PathBuf,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Host to bind to (overrides the config file).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides the config file).
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory to serve static files from (overrides the config file).
        #[arg(long, env = "GREENPAY_WEB_DIR")]
        web_dir: Option<PathBuf>,
    },

    /// Ask the support bot a question without starting the server.
    Ask {
        /// The message to answer.
        message: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["greenpay", "serve", "--port", "8080", "--host", "127.0.0.1"]);
        match cli.command {
            Commands::Serve { host, port, .. } => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_ask_with_global_flags() {
        let cli = Cli::parse_from(["greenpay", "ask", "what do you charge?", "--json", "-v"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Ask { ref message } if message == "what do you charge?"));
    }
}
