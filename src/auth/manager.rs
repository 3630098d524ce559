use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use super::token::TokenExtractor;
use crate::error::AuthError;
use crate::http::{HttpRequest, Transport};
use crate::models::{Credentials, HttpMethod, SessionState};

/// Login route on the target, independent of the loaded collection.
pub const LOGIN_PATH: &str = "/api/auth/login";

pub struct AuthManager {
    transport: Arc<dyn Transport>,
    extractor: TokenExtractor,
}

impl AuthManager {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            extractor: TokenExtractor::default(),
        }
    }

    pub fn with_extractor(mut self, extractor: TokenExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub async fn authenticate(
        &self,
        base_url: &str,
        credentials: &Credentials,
    ) -> Result<String, AuthError> {
        let url = format!("{}{}", base_url.trim_end_matches('/'), LOGIN_PATH);
        let payload = json!({
            "email": credentials.identifier,
            "password": credentials.secret,
        });

        let request = HttpRequest::new(HttpMethod::Post, &url).json(payload);
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            warn!(status = response.status, "login rejected");
            return Err(AuthError::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        let token = response
            .json()
            .and_then(|body| self.extractor.extract(&body));

        match token {
            Some(token) => {
                info!("authenticated against {}", url);
                Ok(token)
            }
            None => {
                warn!(body = %response.body, "could not extract access token from login response");
                Err(AuthError::TokenExtraction {
                    body: response.body,
                })
            }
        }
    }

    /// Logs in and returns the session to scan with. On any failure the
    /// session comes back unchanged, without a credential, alongside the error.
    pub async fn authenticate_session(
        &self,
        session: &SessionState,
        credentials: &Credentials,
    ) -> (SessionState, Option<AuthError>) {
        match self.authenticate(session.base_url(), credentials).await {
            Ok(token) => (session.with_bearer(&token), None),
            Err(e) => (session.clone(), Some(e)),
        }
    }
}
