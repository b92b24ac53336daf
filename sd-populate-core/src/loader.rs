//! Targets file loader
//!
//! Reads a JSON targets file into [`TargetGroups`]. Only JSON syntax and
//! value types are checked here; missing `targets`/`labels` keys surface
//! later, when the group is published.

use std::path::Path;

use tracing::debug;

use crate::domain::target_group::TargetGroups;
use crate::error::LoadError;

/// Load target groups from a JSON file
///
/// # Errors
/// - `LoadError::FileAccess` if the file is missing or unreadable
/// - `LoadError::Parse` if the content is not a JSON object of target groups
pub fn load_target_groups(path: impl AsRef<Path>) -> Result<TargetGroups, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let groups = parse_target_groups(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Loaded {} target group(s) from {}",
        groups.len(),
        path.display()
    );
    Ok(groups)
}

/// Parse target groups from a JSON string
pub fn parse_target_groups(content: &str) -> Result<TargetGroups, serde_json::Error> {
    serde_json::from_str(content)
}
