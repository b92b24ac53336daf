//! populate_datastore
//!
//! Loads target groups from a JSON file and registers them, with their
//! labels, on a service-discovery server.

mod commands;
mod config;
mod publisher;
mod verify;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Action, handle_action};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "populate_datastore")]
#[command(about = "Utility to load sample targets from JSON file", long_about = None)]
struct Cli {
    /// Add or remove all targets
    #[arg(short, long, value_enum)]
    option: Option<Action>,

    /// File containing the json targets
    #[arg(short, long, required_if_eq("option", "add_all"))]
    file: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// API host
    #[arg(long, env = "SD_API_HOST", default_value = "127.0.0.1:80")]
    host: String,

    /// Print the requests that would be sent without sending them
    #[arg(long)]
    dry_run: bool,

    /// Check the API health endpoint before publishing
    #[arg(long)]
    check_health: bool,

    /// Compare the server's target groups with the file after publishing
    #[arg(long)]
    verify: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);
    if cli.debug {
        println!("debug mode is enabled");
    }

    let config = Config {
        host: cli.host,
        debug: cli.debug,
        dry_run: cli.dry_run,
        check_health: cli.check_health,
        verify: cli.verify,
        timeout: cli.timeout.map(Duration::from_secs),
    };

    handle_action(cli.option, cli.file, &config).await
}

/// Initialize logging
///
/// `RUST_LOG` wins when set. Otherwise `--debug` raises the workspace crates
/// to debug and turns on reqwest's connection traces.
fn init_logging(debug: bool) {
    let default_filter = if debug {
        "populate_datastore=debug,sd_populate_client=debug,sd_populate_core=debug,reqwest=trace"
    } else {
        "populate_datastore=info,sd_populate_client=info,sd_populate_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_short_flags() {
        let cli = Cli::try_parse_from([
            "populate_datastore",
            "-o",
            "add_all",
            "-f",
            "targets.json",
            "-d",
            "--host",
            "localhost:8080",
        ])
        .unwrap();

        assert_eq!(cli.option, Some(Action::AddAll));
        assert_eq!(cli.file, Some(PathBuf::from("targets.json")));
        assert!(cli.debug);
        assert_eq!(cli.host, "localhost:8080");
    }

    #[test]
    fn test_cli_accepts_remove_all_without_file() {
        let cli = Cli::try_parse_from(["populate_datastore", "--option", "remove_all"]).unwrap();
        assert_eq!(cli.option, Some(Action::RemoveAll));
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_cli_add_all_requires_file() {
        let result = Cli::try_parse_from(["populate_datastore", "--option", "add_all"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_option() {
        let result = Cli::try_parse_from(["populate_datastore", "--option", "purge"]);
        assert!(result.is_err());
    }
}
