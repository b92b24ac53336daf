//! Post-publish verification
//!
//! Reads back the server's view of every target group (`GET /debug_targets`)
//! and reports where it differs from the targets file.

use anyhow::{Context, Result};
use colored::*;
use sd_populate_client::{DatastoreApi, DebugTargets};
use sd_populate_core::TargetGroups;

/// A label whose value on the server differs from the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDiff {
    pub name: String,
    pub expected: String,
    pub actual: Option<String>,
}

/// Differences found for one target group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMismatch {
    pub group: String,
    /// The server does not know the group at all
    pub missing_group: bool,
    pub missing_targets: Vec<String>,
    pub label_diffs: Vec<LabelDiff>,
}

/// Compare the file's target groups with what the server reports
///
/// Extra targets or labels on the server are not reported; only what the
/// file asked for is checked.
pub fn compare(groups: &TargetGroups, server: &DebugTargets) -> Vec<GroupMismatch> {
    let mut mismatches = Vec::new();

    for group in groups {
        let targets = group.targets().unwrap_or(&[]);
        let labels = group.labels().ok();

        let Some(entry) = server.group(group.name()) else {
            mismatches.push(GroupMismatch {
                group: group.name().to_string(),
                missing_group: true,
                missing_targets: targets.to_vec(),
                label_diffs: Vec::new(),
            });
            continue;
        };

        let missing_targets: Vec<String> = targets
            .iter()
            .filter(|t| !entry.targets.contains(*t))
            .cloned()
            .collect();

        let label_diffs: Vec<LabelDiff> = labels
            .into_iter()
            .flatten()
            .filter(|(name, value)| entry.labels.get(*name) != Some(*value))
            .map(|(name, value)| LabelDiff {
                name: name.clone(),
                expected: value.clone(),
                actual: entry.labels.get(name).cloned(),
            })
            .collect();

        if !missing_targets.is_empty() || !label_diffs.is_empty() {
            mismatches.push(GroupMismatch {
                group: group.name().to_string(),
                missing_group: false,
                missing_targets,
                label_diffs,
            });
        }
    }

    mismatches
}

/// Fetch the server's target groups and compare them with the file
pub async fn verify(api: &dyn DatastoreApi, groups: &TargetGroups) -> Result<Vec<GroupMismatch>> {
    let server = api
        .debug_targets()
        .await
        .context("Failed to fetch target groups for verification")?;

    Ok(compare(groups, &server))
}

/// Print verification results
pub fn print_mismatches(mismatches: &[GroupMismatch]) {
    if mismatches.is_empty() {
        println!("{}", "✓ All target groups match the server".green());
        return;
    }

    println!(
        "{}",
        format!("✗ {} target group(s) differ from the server:", mismatches.len())
            .red()
            .bold()
    );
    for mismatch in mismatches {
        if mismatch.missing_group {
            println!("  {} {}", mismatch.group.bold(), "(not found)".red());
            continue;
        }

        println!("  {}", mismatch.group.bold());
        for target in &mismatch.missing_targets {
            println!("    missing target: {}", target.yellow());
        }
        for diff in &mismatch.label_diffs {
            println!(
                "    label {}: expected {}, found {}",
                diff.name.cyan(),
                diff.expected,
                diff.actual.as_deref().unwrap_or("<unset>").dimmed()
            );
        }
    }
}
