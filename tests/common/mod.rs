#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;

use postscan::{HttpRequest, HttpResponse, Transport, TransportError};

/// In-memory transport: answers by the first rule whose needle appears in the
/// URL, and records every request it sees.
pub struct ScriptedTransport {
    rules: Vec<(String, Result<HttpResponse, String>)>,
    fallback: HttpResponse,
    pub sent: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: HttpResponse::new(200, "{}"),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(mut self, needle: &str, status: u16, body: &str) -> Self {
        self.rules
            .push((needle.to_string(), Ok(HttpResponse::new(status, body))));
        self
    }

    pub fn fail(mut self, needle: &str, message: &str) -> Self {
        self.rules.push((needle.to_string(), Err(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request.clone());

        for (needle, answer) in &self.rules {
            if request.url.contains(needle.as_str()) {
                return match answer {
                    Ok(response) => Ok(response.clone()),
                    Err(message) => Err(TransportError::Request {
                        url: request.url.clone(),
                        message: message.clone(),
                    }),
                };
            }
        }

        Ok(self.fallback.clone())
    }
}
