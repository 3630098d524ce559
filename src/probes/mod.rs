mod injection;
mod payloads;
mod signature;

pub use injection::{Detection, InjectionProbe};
pub use payloads::PayloadSet;
pub use signature::SqlErrorSignatures;

use async_trait::async_trait;
use tracing::debug;

use crate::http::Transport;
use crate::models::{HttpMethod, ScanAccumulator, SessionState};

/// Everything a probe knows about the endpoint it is pointed at.
pub struct ProbeTarget<'a> {
    pub endpoint_name: &'a str,
    pub method: &'a HttpMethod,
    pub url: &'a str,
    pub session: &'a SessionState,
    /// Status the endpoint answered with during the smoke request.
    pub baseline_status: Option<u16>,
}

/// A pluggable check run once per dispatched endpoint. Implementations may
/// send extra requests and may record findings, but are not required to do
/// either.
#[async_trait]
pub trait Probe: Send + Sync {
    fn name(&self) -> &str;

    async fn run(
        &self,
        target: &ProbeTarget<'_>,
        transport: &dyn Transport,
        acc: &mut ScanAccumulator,
    );
}

/// Ordered set of probes; run in registration order.
pub struct ProbeRegistry {
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeRegistry {
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(InjectionProbe::sql()));
        registry.register(Box::new(InjectionProbe::xss()));
        registry
    }

    pub fn register(&mut self, probe: Box<dyn Probe>) {
        self.probes.push(probe);
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    pub async fn run_all(
        &self,
        target: &ProbeTarget<'_>,
        transport: &dyn Transport,
        acc: &mut ScanAccumulator,
    ) {
        for probe in &self.probes {
            debug!(probe = probe.name(), endpoint = target.endpoint_name, "running probe");
            probe.run(target, transport, acc).await;
        }
    }
}

impl Default for ProbeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
