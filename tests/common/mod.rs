//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use xpnav::navigator::{Navigator, flatten};
use xpnav::trace::Resource;
use xpnav::trace::parser::parse;

pub const CLAIM_TRACE: &str = include_str!("../fixtures/claim_trace.json");
pub const PACKAGE_TRACE: &str = include_str!("../fixtures/package_trace.json");

/// Claim -> composite -> (paused managed resource, missing secret), plus a usage
pub fn claim_trace() -> Arc<Resource> {
    Arc::new(parse(CLAIM_TRACE.as_bytes()).unwrap())
}

/// Configuration -> (revision, provider)
pub fn package_trace() -> Arc<Resource> {
    Arc::new(parse(PACKAGE_TRACE.as_bytes()).unwrap())
}

pub fn resource(value: serde_json::Value) -> Resource {
    serde_json::from_value(value).unwrap()
}

/// A trace whose node names are `names`: the first is the root, the rest its children
pub fn flat_trace(names: &[&str]) -> Arc<Resource> {
    let children: Vec<_> = names[1..]
        .iter()
        .map(|name| {
            serde_json::json!({
                "object": {"apiVersion": "example.org/v1", "kind": "XR", "metadata": {"name": name}}
            })
        })
        .collect();
    Arc::new(resource(serde_json::json!({
        "object": {"apiVersion": "example.org/v1", "kind": "XR", "metadata": {"name": names[0]}},
        "children": children
    })))
}

pub fn navigator_for(root: &Arc<Resource>) -> Navigator {
    let mut nav = Navigator::new(true);
    nav.set_rows(flatten(root, false));
    nav
}
