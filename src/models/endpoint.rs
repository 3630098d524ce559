use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Other(String),
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Other(name) => name,
        };
        write!(f, "{}", s)
    }
}

impl HttpMethod {
    /// Collections may carry any verb; unknown ones are kept verbatim so the
    /// executor can decide to skip them.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            other => HttpMethod::Other(other.to_string()),
        }
    }

    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

/// One concrete request to replay, flattened out of the collection tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub name: String,
    pub method: HttpMethod,
    pub url_template: String,
    pub body_template: Option<String>,
}

impl EndpointDescriptor {
    pub fn new(name: impl Into<String>, method: HttpMethod, url_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            url_template: url_template.into(),
            body_template: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body_template = Some(body.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_methods() {
        assert_eq!(HttpMethod::parse("get"), HttpMethod::Get);
        assert_eq!(HttpMethod::parse("DELETE"), HttpMethod::Delete);
        assert_eq!(HttpMethod::parse(" post "), HttpMethod::Post);
    }

    #[test]
    fn test_parse_unknown_method_is_kept() {
        let method = HttpMethod::parse("purge");
        assert_eq!(method, HttpMethod::Other("PURGE".to_string()));
        assert_eq!(method.to_string(), "PURGE");
    }

    #[test]
    fn test_only_post_carries_body() {
        assert!(HttpMethod::Post.carries_body());
        assert!(!HttpMethod::Put.carries_body());
        assert!(!HttpMethod::Get.carries_body());
    }
}
