//! casctl - command line reporting for CAS single-sign-on servers.

use clap::Parser;
use color_eyre::Result;
use colored::Colorize;

use casctl::cli::args::{Args, Commands};
use casctl::cli::commands;
use casctl::config::Settings;
use casctl::{constants, logging, theme};

fn main() {
    // Usage errors exit here, before any network activity.
    let args = Args::parse();
    theme::configure();

    if let Err(e) = run(args) {
        eprintln!("{}: {e:#}", constants::CLI_MSG_ERROR.color(theme::ERROR).bold());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    color_eyre::install()?;

    let settings = Settings::load(args.config.as_deref())?.with_overrides(args.timeout, args.verbose);
    logging::init(settings.logging.level);
    tracing::debug!(?settings, "configuration loaded");

    match args.command {
        Commands::Ssosessions { url } => commands::ssosessions(&url, &settings),
    }
}
