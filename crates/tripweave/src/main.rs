// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tripweave - plan a trip from the terminal.
//!
//! This is the binary entry point. It loads configuration, installs the
//! tracing subscriber and dispatches to the subcommands.

mod check;
mod explore;
mod plan;
mod render;
mod shell;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

/// Tripweave - plan a trip from the terminal.
#[derive(Parser, Debug)]
#[command(name = "tripweave", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an itinerary and optionally chat about it.
    Plan(PlanArgs),
    /// Browse the community catalog.
    Explore(ExploreArgs),
    /// Check configuration and backend reachability.
    Check,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    #[arg(long)]
    pub destination: String,
    /// Start date, YYYY-MM-DD.
    #[arg(long = "from", value_name = "DATE")]
    pub start_date: String,
    /// End date, YYYY-MM-DD.
    #[arg(long = "to", value_name = "DATE")]
    pub end_date: String,
    /// Budget per person.
    #[arg(long)]
    pub budget: String,
    /// Number of travelers (defaults to planner.default_travelers).
    #[arg(long, default_value = "")]
    pub travelers: String,
    /// Comma-separated interests.
    #[arg(long, default_value = "")]
    pub interests: String,
    /// Anything else the planner should know.
    #[arg(long, default_value = "")]
    pub notes: String,
    /// Open the follow-up chat shell once the itinerary is ready.
    #[arg(long)]
    pub chat: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExploreArgs {
    /// Filter by title, destination or tag.
    #[arg(long, default_value = "")]
    pub query: String,
    /// Create a pin with this title before listing.
    #[arg(long, requires = "pin_destination")]
    pub pin_title: Option<String>,
    #[arg(long, requires = "pin_title")]
    pub pin_destination: Option<String>,
    /// Like a catalog item by id before listing. Repeatable.
    #[arg(long = "like", value_name = "ID")]
    pub likes: Vec<u64>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => tripweave_config::load_and_validate_path(path),
        None => tripweave_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            tripweave_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.planner.log_level);

    let outcome = match cli.command {
        Some(Commands::Plan(args)) => plan::run_plan(&config, args).await,
        Some(Commands::Explore(args)) => explore::run_explore(&config, args).await,
        Some(Commands::Check) => check::run_check(&config).await,
        None => {
            println!("tripweave: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tripweave={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_flags_parse() {
        let cli = Cli::try_parse_from([
            "tripweave",
            "plan",
            "--destination",
            "Paris",
            "--from",
            "2026-05-01",
            "--to",
            "2026-05-04",
            "--budget",
            "1200",
            "--interests",
            "food,museums",
            "--chat",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Plan(args)) => {
                assert_eq!(args.destination, "Paris");
                assert_eq!(args.start_date, "2026-05-01");
                assert_eq!(args.travelers, "");
                assert!(args.chat);
            }
            other => panic!("expected plan, got {other:?}"),
        }
    }

    #[test]
    fn pin_flags_come_in_pairs() {
        let err = Cli::try_parse_from(["tripweave", "explore", "--pin-title", "Beach House"]);
        assert!(err.is_err());

        let cli = Cli::try_parse_from([
            "tripweave",
            "explore",
            "--pin-title",
            "Beach House",
            "--pin-destination",
            "Goa",
            "--like",
            "4",
            "--like",
            "6",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Explore(args)) => {
                assert_eq!(args.pin_destination.as_deref(), Some("Goa"));
                assert_eq!(args.likes, vec![4, 6]);
            }
            other => panic!("expected explore, got {other:?}"),
        }
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::try_parse_from(["tripweave", "check", "--config", "/tmp/t.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.toml")));
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = tripweave_config::load_and_validate_str("").expect("defaults are valid");
        assert_eq!(config.service.base_url, "http://127.0.0.1:5000");
    }
}
