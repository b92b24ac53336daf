//! Commands module
//!
//! Defines the actions the CLI can run and routes them to their handlers.

mod add_all;

use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;

/// Actions selectable with `--option`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Register every target group of the file
    #[value(name = "add_all")]
    AddAll,
    /// Remove every target group of the file (not supported)
    #[value(name = "remove_all")]
    RemoveAll,
}

/// Message printed for any action other than `add_all`
pub const UNSUPPORTED_ACTION: &str = r#"only the "add_all" action is supported. Terminating."#;

/// Handle a CLI action
///
/// `remove_all`, like a missing `--option`, is reported as unsupported and
/// performs no request.
///
/// # Arguments
/// * `action` - The selected action, if any
/// * `file` - Path of the targets file
/// * `config` - The CLI configuration
pub async fn handle_action(
    action: Option<Action>,
    file: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    run_action(action, file, config, &mut std::io::stdout()).await
}

/// Route `action`, writing the unsupported-action message to `out`
async fn run_action(
    action: Option<Action>,
    file: Option<PathBuf>,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        Some(Action::AddAll) => {
            let file =
                file.ok_or_else(|| anyhow::anyhow!("--file is required for the add_all action"))?;
            add_all::handle_add_all(&file, config).await
        }
        Some(Action::RemoveAll) | None => {
            writeln!(out, "{}", UNSUPPORTED_ACTION.yellow())?;
            Ok(())
        }
    }
}
