//! Data Transfer Objects returned by the service-discovery server
//!
//! `GET /api/targets` returns the Prometheus HTTP SD format: a list of
//! `{targets, labels}` entries without group names. `GET /debug_targets`
//! returns the same entries keyed by group name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::target_group::Labels;

/// One target group as served by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetGroupEntry {
    #[serde(default)]
    pub targets: Vec<String>,

    #[serde(default)]
    pub labels: Labels,
}

/// Response of `GET /debug_targets`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugTargets {
    #[serde(default)]
    pub targets: BTreeMap<String, TargetGroupEntry>,
}

impl DebugTargets {
    /// Look up a group by name
    pub fn group(&self, name: &str) -> Option<&TargetGroupEntry> {
        self.targets.get(name)
    }
}
