use serde_json::Value;
use std::fs;
use tracing::debug;

use crate::error::CollectionError;
use crate::models::{EndpointDescriptor, HttpMethod};

const UNNAMED: &str = "(unnamed)";

/// Flattens a Postman-style collection into endpoint descriptors.
pub struct CollectionLoader;

impl CollectionLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load_file(&self, path: &str) -> Result<Vec<EndpointDescriptor>, CollectionError> {
        let content = fs::read_to_string(path).map_err(|source| CollectionError::Read {
            path: path.to_string(),
            source,
        })?;

        self.load(&content)
    }

    pub fn load(&self, content: &str) -> Result<Vec<EndpointDescriptor>, CollectionError> {
        let document: Value = serde_json::from_str(content)
            .map_err(|e| CollectionError::Malformed(format!("not valid JSON: {}", e)))?;

        let root = match &document {
            Value::Array(items) => items,
            Value::Object(map) => match map.get("item") {
                Some(Value::Array(items)) => items,
                Some(_) => {
                    return Err(CollectionError::Malformed(
                        "root 'item' must be an array".to_string(),
                    ));
                }
                None => {
                    return Err(CollectionError::Malformed(
                        "root has no 'item' array".to_string(),
                    ));
                }
            },
            _ => {
                return Err(CollectionError::Malformed(
                    "root must be an object or an array of items".to_string(),
                ));
            }
        };

        self.flatten(root)
    }

    /// Depth-first pre-order walk. Uses an explicit stack so nesting depth is
    /// bounded by memory, not by the call stack.
    fn flatten(&self, root: &[Value]) -> Result<Vec<EndpointDescriptor>, CollectionError> {
        let mut endpoints = Vec::new();
        let mut stack: Vec<&Value> = root.iter().rev().collect();

        while let Some(node) = stack.pop() {
            // A node carrying 'item' is a group even if it also has a request.
            if let Some(children) = node.get("item") {
                let children = children.as_array().ok_or_else(|| {
                    CollectionError::Malformed(format!(
                        "group '{}' has a non-array 'item'",
                        Self::node_name(node)
                    ))
                })?;
                stack.extend(children.iter().rev());
                continue;
            }

            match node.get("request") {
                Some(request) => endpoints.push(Self::parse_leaf(node, request)?),
                None => debug!(name = Self::node_name(node), "ignoring node without item or request"),
            }
        }

        Ok(endpoints)
    }

    fn parse_leaf(node: &Value, request: &Value) -> Result<EndpointDescriptor, CollectionError> {
        let name = Self::node_name(node);

        let method = request
            .get("method")
            .and_then(|m| m.as_str())
            .ok_or_else(|| {
                CollectionError::Malformed(format!("request '{}' is missing 'method'", name))
            })?;

        let url = match request.get("url") {
            Some(Value::String(raw)) => raw.clone(),
            Some(url) => url
                .get("raw")
                .and_then(|r| r.as_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    CollectionError::Malformed(format!("request '{}' has no 'url.raw'", name))
                })?,
            None => {
                return Err(CollectionError::Malformed(format!(
                    "request '{}' is missing 'url'",
                    name
                )));
            }
        };

        let mut endpoint = EndpointDescriptor::new(name, HttpMethod::parse(method), url);

        if let Some(raw) = request
            .get("body")
            .and_then(|b| b.get("raw"))
            .and_then(|r| r.as_str())
        {
            endpoint = endpoint.with_body(raw);
        }

        Ok(endpoint)
    }

    fn node_name(node: &Value) -> &str {
        node.get("name").and_then(|n| n.as_str()).unwrap_or(UNNAMED)
    }
}

impl Default for CollectionLoader {
    fn default() -> Self {
        Self::new()
    }
}
