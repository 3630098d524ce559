use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use super::policy::ExclusionPolicy;
use super::template::TemplateResolver;
use crate::http::{HttpRequest, Transport};
use crate::models::{EndpointDescriptor, ExecutionOutcome, ScanAccumulator, SessionState};
use crate::probes::{ProbeRegistry, ProbeTarget};

/// Replays one descriptor: resolve, filter, dispatch, classify, probe.
pub struct EndpointExecutor {
    transport: Arc<dyn Transport>,
    resolver: TemplateResolver,
    policy: ExclusionPolicy,
    probes: ProbeRegistry,
}

impl EndpointExecutor {
    pub fn new(transport: Arc<dyn Transport>, probes: ProbeRegistry) -> Self {
        Self {
            transport,
            resolver: TemplateResolver::default(),
            policy: ExclusionPolicy::default(),
            probes,
        }
    }

    pub fn with_resolver(mut self, resolver: TemplateResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_policy(mut self, policy: ExclusionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn resolve_url(&self, endpoint: &EndpointDescriptor, session: &SessionState) -> String {
        self.resolver.resolve(&endpoint.url_template, session.base_url())
    }

    pub async fn execute(
        &self,
        endpoint: &EndpointDescriptor,
        session: &SessionState,
        acc: &mut ScanAccumulator,
    ) -> ExecutionOutcome {
        // Exclusion sees placeholder names such as {{loginId}} before they
        // collapse into the path sentinel.
        let unresolved = self
            .resolver
            .resolve_base(&endpoint.url_template, session.base_url());

        if let Some(reason) = self.policy.check(&endpoint.method, &unresolved) {
            debug!(endpoint = %endpoint.name, ?reason, "skipping endpoint");
            let outcome = ExecutionOutcome::Skipped(reason);
            acc.record(endpoint, &outcome);
            return outcome;
        }

        let url = self.resolve_url(endpoint, session);
        let request = self.build_request(endpoint, &url, session);

        let start = Instant::now();
        let result = self.transport.send(request).await;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let outcome = match result {
            Ok(response) => ExecutionOutcome::Completed {
                status: response.status,
                elapsed_ms,
            },
            Err(e) => {
                warn!(endpoint = %endpoint.name, error = %e, "request failed");
                ExecutionOutcome::TransportFailed {
                    error: e.to_string(),
                    elapsed_ms,
                }
            }
        };

        acc.record(endpoint, &outcome);

        if let ExecutionOutcome::Completed { status, .. } = &outcome {
            let target = ProbeTarget {
                endpoint_name: &endpoint.name,
                method: &endpoint.method,
                url: &url,
                session,
                baseline_status: Some(*status),
            };
            self.probes.run_all(&target, self.transport.as_ref(), acc).await;
        }

        outcome
    }

    fn build_request(
        &self,
        endpoint: &EndpointDescriptor,
        url: &str,
        session: &SessionState,
    ) -> HttpRequest {
        let request = HttpRequest::for_session(endpoint.method.clone(), url, session);

        if !endpoint.method.carries_body() {
            return request;
        }

        // An unparseable body is dropped and the request still goes out.
        match endpoint
            .body_template
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| serde_json::from_str::<serde_json::Value>(raw))
        {
            Some(Ok(body)) => request.json(body),
            Some(Err(e)) => {
                debug!(endpoint = %endpoint.name, error = %e, "body is not JSON, sending without body");
                request
            }
            None => request,
        }
    }
}
