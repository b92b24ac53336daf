//! `add_all` handler
//!
//! Loads the targets file and registers every target group with the API.

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use sd_populate_client::{DatastoreApi, DatastoreClient};
use sd_populate_core::{TargetGroups, load_target_groups};
use tracing::info;

use crate::config::Config;
use crate::publisher::{PublishOptions, PublishSummary, publish};
use crate::verify::{print_mismatches, verify};

/// Load `file` and publish it to the configured API host
pub async fn handle_add_all(file: &Path, config: &Config) -> Result<()> {
    // The file is read before any client exists, so a bad path sends nothing.
    let groups = load_target_groups(file)?;

    let client = DatastoreClient::with_config(&config.host, &config.client_config())
        .with_context(|| format!("Invalid API host: {}", config.host))?;

    run(&client, &groups, config).await
}

async fn run(api: &dyn DatastoreApi, groups: &TargetGroups, config: &Config) -> Result<()> {
    if config.check_health && !config.dry_run {
        api.health()
            .await
            .context("Service-discovery API is not healthy")?;
        info!("Service-discovery API is healthy");
    }

    let options = PublishOptions {
        show_requests: config.show_requests(),
        dry_run: config.dry_run,
    };
    let summary = publish(api, groups, options).await?;
    print_summary(&summary, config.dry_run);

    if config.verify && !config.dry_run {
        let mismatches = verify(api, groups).await?;
        print_mismatches(&mismatches);
        if !mismatches.is_empty() {
            anyhow::bail!(
                "{} target group(s) did not match after publishing",
                mismatches.len()
            );
        }
    }

    Ok(())
}

fn print_summary(summary: &PublishSummary, dry_run: bool) {
    let verb = if dry_run { "Would register" } else { "Registered" };
    println!(
        "{}",
        format!(
            "{} {} target(s) and {} label(s) in {} target group(s)",
            verb, summary.targets, summary.labels, summary.groups
        )
        .green()
        .bold()
    );
}
