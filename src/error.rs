use thiserror::Error;

/// Raised while turning a collection document into endpoint descriptors.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("failed to read collection {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed collection: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login rejected with status {status}")]
    Rejected { status: u16, body: String },

    #[error("login succeeded but no access token was found in the response")]
    TokenExtraction { body: String },

    #[error("login request failed: {0}")]
    Transport(#[from] TransportError),
}

impl AuthError {
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("a login secret is required when a login identifier is given")]
    MissingSecret,
}
