//! Target group domain model
//!
//! A target group is a named set of hosts that share the same labels. The
//! targets file is a JSON object keyed by group name:
//!
//! ```json
//! {
//!     "node_exporters": {
//!         "targets": ["10.0.10.2:9100", "10.0.10.3:9100"],
//!         "labels": { "__meta_datacenter": "london" }
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::SchemaError;

/// Labels attached to a target group, ordered by label name
pub type Labels = BTreeMap<String, String>;

/// Body of one entry in the targets file
///
/// Both keys are optional here: a group missing one of them is only an
/// error once the publisher needs that key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct TargetGroupBody {
    targets: Option<Vec<String>>,
    labels: Option<Labels>,
}

/// A named group of targets and the labels that apply to all of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGroup {
    name: String,
    body: TargetGroupBody,
}

impl TargetGroup {
    /// Name of the group, as given by its key in the targets file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hosts of the group, in file order
    ///
    /// # Errors
    /// `SchemaError::MissingKey` if the entry had no `targets` key.
    pub fn targets(&self) -> Result<&[String], SchemaError> {
        self.body
            .targets
            .as_deref()
            .ok_or_else(|| SchemaError::missing(&self.name, "targets"))
    }

    /// Labels of the group
    ///
    /// # Errors
    /// `SchemaError::MissingKey` if the entry had no `labels` key.
    pub fn labels(&self) -> Result<&Labels, SchemaError> {
        self.body
            .labels
            .as_ref()
            .ok_or_else(|| SchemaError::missing(&self.name, "labels"))
    }
}

/// All target groups of a targets file, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetGroups(Vec<TargetGroup>);

impl TargetGroups {
    pub fn iter(&self) -> std::slice::Iter<'_, TargetGroup> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TargetGroups {
    type Item = &'a TargetGroup;
    type IntoIter = std::slice::Iter<'a, TargetGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Visiting the map directly keeps the order the groups appear in the file.
impl<'de> Deserialize<'de> for TargetGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TargetGroupsVisitor;

        impl<'de> Visitor<'de> for TargetGroupsVisitor {
            type Value = TargetGroups;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping target group names to target groups")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, body)) = map.next_entry::<String, TargetGroupBody>()? {
                    groups.push(TargetGroup { name, body });
                }
                Ok(TargetGroups(groups))
            }
        }

        deserializer.deserialize_map(TargetGroupsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_keep_document_order() {
        let groups: TargetGroups = serde_json::from_str(
            r#"{
                "zeta": {"targets": [], "labels": {}},
                "alpha": {"targets": [], "labels": {}},
                "mid": {"targets": [], "labels": {}}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = groups.iter().map(TargetGroup::name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_targets_keep_list_order() {
        let groups: TargetGroups =
            serde_json::from_str(r#"{"g1": {"targets": ["h2", "h1", "h3"], "labels": {}}}"#)
                .unwrap();

        let group = groups.iter().next().unwrap();
        assert_eq!(group.targets().unwrap(), ["h2", "h1", "h3"]);
    }

    #[test]
    fn test_labels_are_sorted_by_name() {
        let groups: TargetGroups = serde_json::from_str(
            r#"{"g1": {"targets": [], "labels": {"zone": "a", "env": "prod", "job": "node"}}}"#,
        )
        .unwrap();

        let group = groups.iter().next().unwrap();
        let names: Vec<&String> = group.labels().unwrap().keys().collect();
        assert_eq!(names, vec!["env", "job", "zone"]);
    }

    #[test]
    fn test_missing_keys_are_reported_on_access() {
        let groups: TargetGroups = serde_json::from_str(r#"{"g1": {"targets": ["h1"]}}"#).unwrap();

        let group = groups.iter().next().unwrap();
        assert!(group.targets().is_ok());
        assert_eq!(
            group.labels().unwrap_err(),
            SchemaError::MissingKey {
                group: "g1".to_string(),
                key: "labels",
            }
        );
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_str::<TargetGroups>(r#"{"g1": {"targets": 5}}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<TargetGroups>(r#"["g1"]"#);
        assert!(result.is_err());
    }
}
