//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::constants;

/// casctl - Reporting for running CAS servers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(long, global = true, env = constants::ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, env = constants::ENV_TIMEOUT)]
    pub timeout: Option<u64>,

    /// Increase diagnostic output (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display a report about active SSO sessions in a running CAS server
    Ssosessions {
        /// Base URL of the CAS server, with trailing slash
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_url() {
        let args = Args::try_parse_from(["casctl", "ssosessions", "https://cas.example/cas/"])
            .unwrap();
        let Commands::Ssosessions { url } = args.command;
        assert_eq!(url, "https://cas.example/cas/");
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "casctl",
            "ssosessions",
            "https://cas.example/",
            "-vv",
            "--timeout",
            "7",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.timeout, Some(7));
    }

    #[test]
    fn test_rejects_wrong_argument_count() {
        assert!(Args::try_parse_from(["casctl", "ssosessions"]).is_err());
        assert!(Args::try_parse_from([
            "casctl",
            "ssosessions",
            "https://a.example/",
            "https://b.example/"
        ])
        .is_err());
    }
}
