//! Trace document parsing

use std::io::Read;

use crate::trace::error::TraceError;
use crate::trace::models::Resource;

/// Parse a JSON trace document into a resource tree
pub fn parse(bytes: &[u8]) -> Result<Resource, TraceError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read a whole stream and parse it as a trace document
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Resource, TraceError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let doc = br#"{
            "object": {"apiVersion": "example.org/v1", "kind": "XApp", "metadata": {"name": "app"}},
            "children": [
                {"object": {"apiVersion": "example.org/v1", "kind": "XDb", "metadata": {"name": "db"}}, "children": []}
            ]
        }"#;
        let root = parse(doc).unwrap();
        assert_eq!(root.name(), "app");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].kind(), "XDb");
    }

    #[test]
    fn test_malformed_document() {
        let err = parse(b"{not json").unwrap_err();
        assert!(matches!(err, TraceError::Malformed(_)));
    }

    #[test]
    fn test_parse_reader() {
        let root = parse_reader(&br#"{"object": {"kind": "XApp"}}"#[..]).unwrap();
        assert_eq!(root.kind(), "XApp");
    }
}
