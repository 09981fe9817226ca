//! Status derivation
//!
//! Turns a node's condition data into the summary shown in the table. Pure
//! functions: the same node always yields the same status.

use chrono::{DateTime, Utc};

use crate::trace::models::{Condition, Resource};

/// API group of installable packages (providers, configurations, functions)
pub const PACKAGE_GROUP: &str = "pkg.crossplane.io";

/// Token shown for a condition that is not reported
pub const MISSING: &str = "-";

/// How a resource kind reports its health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindClass {
    /// Tracked through Installed/Healthy
    Package,
    /// Tracked through Synced/Ready
    Object,
}

/// Classify a kind by its API group
pub fn classify(group: &str) -> KindClass {
    if group == PACKAGE_GROUP || group.ends_with(&format!(".{PACKAGE_GROUP}")) {
        KindClass::Package
    } else {
        KindClass::Object
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectStatus {
    pub synced: String,
    pub synced_last_transition: Option<DateTime<Utc>>,
    pub ready: String,
    pub ready_last_transition: Option<DateTime<Utc>>,
    pub message: String,
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageStatus {
    pub version: String,
    pub installed: String,
    pub installed_last_transition: Option<DateTime<Utc>>,
    pub healthy: String,
    pub healthy_last_transition: Option<DateTime<Utc>>,
    pub state: String,
    pub message: String,
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceStatus {
    Object(ObjectStatus),
    Package(PackageStatus),
}

impl ResourceStatus {
    pub fn ok(&self) -> bool {
        match self {
            ResourceStatus::Object(s) => s.ok,
            ResourceStatus::Package(s) => s.ok,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ResourceStatus::Object(s) => &s.message,
            ResourceStatus::Package(s) => &s.message,
        }
    }
}

/// Derive the display status of one node
pub fn derive_status(resource: &Resource, class: KindClass) -> ResourceStatus {
    let conditions = resource.conditions();
    match class {
        KindClass::Object => {
            let synced = find(&conditions, "Synced");
            let ready = find(&conditions, "Ready");
            ResourceStatus::Object(ObjectStatus {
                synced: token(synced),
                synced_last_transition: synced.and_then(|c| c.last_transition_time),
                ready: token(ready),
                ready_last_transition: ready.and_then(|c| c.last_transition_time),
                message: summary(resource, [ready, synced]),
                ok: is_true(synced) && is_true(ready),
            })
        }
        KindClass::Package => {
            let installed = find(&conditions, "Installed");
            let healthy = find(&conditions, "Healthy");
            ResourceStatus::Package(PackageStatus {
                version: package_version(resource),
                installed: token(installed),
                installed_last_transition: installed.and_then(|c| c.last_transition_time),
                healthy: token(healthy),
                healthy_last_transition: healthy.and_then(|c| c.last_transition_time),
                state: resource
                    .object
                    .str_at(&["spec", "desiredState"])
                    .filter(|s| !s.is_empty())
                    .unwrap_or(MISSING)
                    .to_string(),
                message: summary(resource, [healthy, installed]),
                ok: is_true(installed) && is_true(healthy),
            })
        }
    }
}

/// Tag or digest of `spec.package`, "-" when unknown
fn package_version(resource: &Resource) -> String {
    let Some(package) = resource.object.str_at(&["spec", "package"]) else {
        return MISSING.to_string();
    };
    // Digest references carry a colon inside the digest itself
    let version = match package.rsplit_once('@') {
        Some((_, digest)) => digest,
        None => match package.rsplit_once(':') {
            Some((image, tag)) if !tag.contains('/') && !image.is_empty() => tag,
            _ => "",
        },
    };
    if version.is_empty() {
        MISSING.to_string()
    } else {
        version.to_string()
    }
}

fn find<'a>(conditions: &'a [Condition], condition_type: &str) -> Option<&'a Condition> {
    conditions.iter().find(|c| c.condition_type == condition_type)
}

fn token(condition: Option<&Condition>) -> String {
    condition
        .map(|c| c.status.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| MISSING.to_string())
}

fn is_true(condition: Option<&Condition>) -> bool {
    condition.is_some_and(Condition::is_true)
}

// Conditions are checked in priority order; the node error is the fallback.
fn summary(resource: &Resource, by_priority: [Option<&Condition>; 2]) -> String {
    by_priority
        .into_iter()
        .flatten()
        .filter(|c| !c.is_true())
        .map(|c| if c.message.is_empty() { &c.reason } else { &c.message })
        .find(|text| !text.is_empty())
        .cloned()
        .or_else(|| resource.error.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource(value: serde_json::Value) -> Resource {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("pkg.crossplane.io"), KindClass::Package);
        assert_eq!(classify("meta.pkg.crossplane.io"), KindClass::Package);
        assert_eq!(classify("apiextensions.crossplane.io"), KindClass::Object);
        assert_eq!(classify("xpkg.crossplane.io"), KindClass::Object);
        assert_eq!(classify(""), KindClass::Object);
    }

    #[test]
    fn test_missing_conditions() {
        let status = derive_status(&resource(json!({"object": {}})), KindClass::Object);
        let ResourceStatus::Object(s) = status else {
            panic!("expected object status");
        };
        assert_eq!(s.synced, "-");
        assert_eq!(s.ready, "-");
        assert_eq!(s.synced_last_transition, None);
        assert!(!s.ok);
        assert_eq!(s.message, "");
    }

    #[test]
    fn test_ready_message_takes_priority() {
        let r = resource(json!({"object": {"status": {"conditions": [
            {"type": "Synced", "status": "False", "message": "cannot sync"},
            {"type": "Ready", "status": "False", "reason": "Creating"}
        ]}}}));
        let status = derive_status(&r, KindClass::Object);
        assert!(!status.ok());
        assert_eq!(status.message(), "Creating");
    }

    #[test]
    fn test_node_error_is_message_fallback() {
        let r = resource(json!({
            "object": {"status": {"conditions": [
                {"type": "Synced", "status": "True"},
                {"type": "Ready", "status": "True"}
            ]}},
            "error": "composed resource not found"
        }));
        let status = derive_status(&r, KindClass::Object);
        assert!(status.ok());
        assert_eq!(status.message(), "composed resource not found");
    }

    #[test]
    fn test_package_status() {
        let r = resource(json!({"object": {
            "spec": {
                "package": "xpkg.upbound.io/crossplane-contrib/provider-aws:v0.39.0",
                "desiredState": "Active"
            },
            "status": {"conditions": [
                {"type": "Installed", "status": "True"},
                {"type": "Healthy", "status": "False", "message": "runtime unhealthy"}
            ]}
        }}));
        let ResourceStatus::Package(s) = derive_status(&r, KindClass::Package) else {
            panic!("expected package status");
        };
        assert_eq!(s.version, "v0.39.0");
        assert_eq!(s.state, "Active");
        assert_eq!(s.installed, "True");
        assert_eq!(s.healthy, "False");
        assert!(!s.ok);
        assert_eq!(s.message, "runtime unhealthy");
    }

    #[test]
    fn test_package_version_forms() {
        let version = |pkg: &str| {
            package_version(&resource(json!({"object": {"spec": {"package": pkg}}})))
        };
        assert_eq!(version("registry:5000/org/provider@sha256:abc"), "sha256:abc");
        assert_eq!(version("registry:5000/org/provider"), "-");
        assert_eq!(version("org/provider:v1.2.0"), "v1.2.0");
        assert_eq!(version("org/provider"), "-");
    }
}
