//! Data structures for trace snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use crate::trace::manifest::Manifest;

/// Annotation that marks a resource as paused
pub const PAUSED_ANNOTATION: &str = "crossplane.io/paused";

/// One node of a trace snapshot
///
/// A node owns its children. Trees are rebuilt wholesale from every fetch and
/// never mutated in place; `Arc` lets display rows point back at their source
/// node without copying the manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub object: Manifest,
    #[serde(default, deserialize_with = "deserialize_node_error")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_children")]
    pub children: Vec<Arc<Resource>>,
}

impl Resource {
    pub fn kind(&self) -> &str {
        self.object.str_at(&["kind"]).unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.object.str_at(&["metadata", "name"]).unwrap_or_default()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.object
            .str_at(&["metadata", "namespace"])
            .filter(|ns| !ns.is_empty())
    }

    pub fn api_version(&self) -> &str {
        self.object.str_at(&["apiVersion"]).unwrap_or_default()
    }

    /// API group parsed from `apiVersion` (empty for the core API)
    pub fn group(&self) -> &str {
        match self.api_version().split_once('/') {
            Some((group, _)) => group,
            None => "",
        }
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.object
            .get_path(&["metadata", "annotations"])
            .and_then(Manifest::as_mapping)
            .and_then(|annotations| annotations.get(key))
            .and_then(Manifest::as_str)
    }

    pub fn is_paused(&self) -> bool {
        self.annotation(PAUSED_ANNOTATION) == Some("true")
    }

    /// Stable row identity: `{kind}.{group}/{name}`
    pub fn id(&self) -> String {
        format!("{}.{}/{}", self.kind(), self.group(), self.name())
    }

    /// Conditions reported under `status.conditions`, skipping malformed entries
    pub fn conditions(&self) -> Vec<Condition> {
        self.object
            .seq_at(&["status", "conditions"])
            .map(|items| items.iter().filter_map(Condition::from_manifest).collect())
            .unwrap_or_default()
    }
}

/// A status condition entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub condition_type: String,
    pub status: String,
    pub last_transition_time: Option<DateTime<Utc>>,
    pub reason: String,
    pub message: String,
}

impl Condition {
    fn from_manifest(entry: &Manifest) -> Option<Self> {
        let condition_type = entry.str_at(&["type"])?.to_string();
        let text = |key: &str| entry.str_at(&[key]).unwrap_or_default().to_string();
        Some(Self {
            condition_type,
            status: text("status"),
            last_transition_time: entry
                .str_at(&["lastTransitionTime"])
                .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
                .map(|ts| ts.with_timezone(&Utc)),
            reason: text("reason"),
            message: text("message"),
        })
    }

    pub fn is_true(&self) -> bool {
        self.status == "True"
    }
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<Arc<Resource>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Arc<Resource>>>::deserialize(deserializer)?.unwrap_or_default())
}

// Trace producers emit the node error either as a string or as a serialized
// error object; an empty object means no error.
fn deserialize_node_error<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) if s.is_empty() => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Object(map)) if map.is_empty() => None,
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Resource {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_identity_accessors() {
        let r = node(json!({
            "object": {
                "apiVersion": "database.example.org/v1alpha1",
                "kind": "XPostgreSQLInstance",
                "metadata": {"name": "db-1", "namespace": "prod"}
            }
        }));
        assert_eq!(r.kind(), "XPostgreSQLInstance");
        assert_eq!(r.group(), "database.example.org");
        assert_eq!(r.namespace(), Some("prod"));
        assert_eq!(r.id(), "XPostgreSQLInstance.database.example.org/db-1");
    }

    #[test]
    fn test_core_group_is_empty() {
        let r = node(json!({
            "object": {"apiVersion": "v1", "kind": "Secret", "metadata": {"name": "creds"}}
        }));
        assert_eq!(r.group(), "");
        assert_eq!(r.id(), "Secret./creds");
        assert_eq!(r.namespace(), None);
    }

    #[test]
    fn test_null_children_and_error_shapes() {
        let r = node(json!({"object": {}, "error": {}, "children": null}));
        assert!(r.children.is_empty());
        assert!(r.error.is_none());

        let r = node(json!({"object": {}, "error": "not found"}));
        assert_eq!(r.error.as_deref(), Some("not found"));
    }

    #[test]
    fn test_conditions_parse_timestamps() {
        let r = node(json!({
            "object": {"status": {"conditions": [
                {"type": "Ready", "status": "True", "lastTransitionTime": "2024-03-01T10:00:00Z"},
                {"status": "False"},
                {"type": "Synced", "status": "False", "lastTransitionTime": "garbage", "reason": "ReconcileError"}
            ]}}
        }));
        let conditions = r.conditions();
        assert_eq!(conditions.len(), 2);
        assert!(conditions[0].is_true());
        assert!(conditions[0].last_transition_time.is_some());
        assert_eq!(conditions[1].last_transition_time, None);
        assert_eq!(conditions[1].reason, "ReconcileError");
    }

    #[test]
    fn test_paused_annotation() {
        let r = node(json!({
            "object": {"metadata": {"annotations": {"crossplane.io/paused": "true"}}}
        }));
        assert!(r.is_paused());
        let r = node(json!({
            "object": {"metadata": {"annotations": {"crossplane.io/paused": "false"}}}
        }));
        assert!(!r.is_paused());
    }
}
