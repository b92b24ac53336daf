//! Target publisher
//!
//! Registers every target group of a targets file with the API: one POST per
//! host, then one POST carrying all of the group's labels. Groups are handled
//! in file order and hosts in list order. The first failure stops the run;
//! requests already sent are not undone.

use anyhow::{Context, Result};
use colored::*;
use sd_populate_client::DatastoreApi;
use sd_populate_core::{TargetGroup, TargetGroups};
use tracing::info;

/// How requests are issued
#[derive(Debug, Clone, Copy, Default)]
pub struct PublishOptions {
    /// Print each request URL before it is sent
    pub show_requests: bool,

    /// Build and print URLs but send nothing
    pub dry_run: bool,
}

/// What a publish run registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishSummary {
    pub groups: usize,
    pub targets: usize,
    pub labels: usize,
}

/// Publish all target groups in order
pub async fn publish(
    api: &dyn DatastoreApi,
    groups: &TargetGroups,
    options: PublishOptions,
) -> Result<PublishSummary> {
    let mut summary = PublishSummary::default();

    for group in groups {
        publish_group(api, group, options, &mut summary).await?;
        summary.groups += 1;
    }

    info!(
        "Published {} target(s) and {} label(s) across {} target group(s)",
        summary.targets, summary.labels, summary.groups
    );
    Ok(summary)
}

async fn publish_group(
    api: &dyn DatastoreApi,
    group: &TargetGroup,
    options: PublishOptions,
    summary: &mut PublishSummary,
) -> Result<()> {
    let name = group.name();

    for target in group.targets()? {
        println!(
            "Adding host {} to target group {}",
            target.cyan(),
            name.bold()
        );
        if options.show_requests {
            println!("\tRunning: POST {}", api.target_url(name, target)?);
        }
        if !options.dry_run {
            api.add_target(name, target)
                .await
                .with_context(|| format!("Failed to add host {} to target group {}", target, name))?;
        }
        summary.targets += 1;
    }

    println!("Adding labels to target group {}", name.bold());
    let labels = group.labels()?;
    if options.show_requests {
        println!("\tRunning: POST {}", api.labels_url(name, labels)?);
    }
    if !options.dry_run {
        api.update_labels(name, labels)
            .await
            .with_context(|| format!("Failed to update labels of target group {}", name))?;
    }
    summary.labels += labels.len();

    println!();
    Ok(())
}
