use std::collections::BTreeMap;
use std::fmt;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Login identifier and secret handed to the auth exchange.
#[derive(Clone)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"***")
            .finish()
    }
}

/// Per-run request context. Never mutated in place: authentication produces
/// a new value via [`SessionState::with_bearer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    base_url: String,
    credential: Option<String>,
    default_headers: BTreeMap<String, String>,
}

impl SessionState {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let mut default_headers = BTreeMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url,
            credential: None,
            default_headers,
        }
    }

    pub fn with_bearer(&self, token: &str) -> Self {
        let mut next = self.clone();
        next.credential = Some(token.to_string());
        next.default_headers
            .insert(AUTHORIZATION_HEADER.to_string(), format!("Bearer {}", token));
        next
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }
}
