//! Manifest value model
//!
//! Trace nodes carry arbitrary Kubernetes objects. Instead of passing raw
//! JSON around, the object is held as an explicit tagged value with typed
//! path lookups.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// A scalar leaf of a manifest
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// A manifest value: a mapping, a sequence or a scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Manifest {
    Mapping(BTreeMap<String, Manifest>),
    Sequence(Vec<Manifest>),
    Scalar(Scalar),
}

impl Default for Manifest {
    fn default() -> Self {
        Manifest::Mapping(BTreeMap::new())
    }
}

impl Manifest {
    /// Look up a nested value by mapping keys
    pub fn get_path(&self, path: &[&str]) -> Option<&Manifest> {
        let mut current = self;
        for key in path {
            current = current.as_mapping()?.get(*key)?;
        }
        Some(current)
    }

    /// Look up a nested string value by mapping keys
    pub fn str_at(&self, path: &[&str]) -> Option<&str> {
        self.get_path(path).and_then(Manifest::as_str)
    }

    /// Look up a nested sequence by mapping keys
    pub fn seq_at(&self, path: &[&str]) -> Option<&[Manifest]> {
        self.get_path(path).and_then(Manifest::as_sequence)
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Manifest>> {
        match self {
            Manifest::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Manifest]> {
        match self {
            Manifest::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Manifest::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Return a copy with every mapping entry named `key` removed, at any depth
    pub fn without_key(&self, key: &str) -> Manifest {
        match self {
            Manifest::Mapping(map) => Manifest::Mapping(
                map.iter()
                    .filter(|(k, _)| k.as_str() != key)
                    .map(|(k, v)| (k.clone(), v.without_key(key)))
                    .collect(),
            ),
            Manifest::Sequence(items) => {
                Manifest::Sequence(items.iter().map(|v| v.without_key(key)).collect())
            }
            Manifest::Scalar(s) => Manifest::Scalar(s.clone()),
        }
    }
}

impl From<Value> for Manifest {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                Manifest::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Value::Array(items) => Manifest::Sequence(items.into_iter().map(Into::into).collect()),
            Value::String(s) => Manifest::Scalar(Scalar::String(s)),
            Value::Number(n) => Manifest::Scalar(Scalar::Number(n)),
            Value::Bool(b) => Manifest::Scalar(Scalar::Bool(b)),
            Value::Null => Manifest::Scalar(Scalar::Null),
        }
    }
}

impl From<Manifest> for Value {
    fn from(manifest: Manifest) -> Self {
        match manifest {
            Manifest::Mapping(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Manifest::Sequence(items) => Value::Array(items.into_iter().map(Into::into).collect()),
            Manifest::Scalar(Scalar::String(s)) => Value::String(s),
            Manifest::Scalar(Scalar::Number(n)) => Value::Number(n),
            Manifest::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            Manifest::Scalar(Scalar::Null) => Value::Null,
        }
    }
}
