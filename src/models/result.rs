use serde::{Deserialize, Serialize};

use super::{EndpointDescriptor, Finding, HttpMethod};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    ExcludedPath(String),
    UnsupportedMethod(HttpMethod),
}

/// What happened to a single descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    Skipped(SkipReason),
    Completed { status: u16, elapsed_ms: f64 },
    TransportFailed { error: String, elapsed_ms: f64 },
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionOutcome::Completed { status, .. } if (200..300).contains(status))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ExecutionOutcome::Skipped(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ExecutionOutcome::Completed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRequest {
    pub method: String,
    pub name: String,
    pub status: Option<u16>,
    pub error: Option<String>,
}

impl FailedRequest {
    pub fn reason(&self) -> String {
        match (&self.status, &self.error) {
            (Some(status), _) => status.to_string(),
            (None, Some(error)) => error.clone(),
            (None, None) => "unknown".to_string(),
        }
    }
}

/// Running totals for one scan. Skipped endpoints only bump `skipped`.
#[derive(Debug, Clone, Default)]
pub struct ScanAccumulator {
    pub total_attempted: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub skipped: usize,
    pub findings: Vec<Finding>,
    pub failures: Vec<FailedRequest>,
}

impl ScanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, endpoint: &EndpointDescriptor, outcome: &ExecutionOutcome) {
        match outcome {
            ExecutionOutcome::Skipped(_) => {
                self.skipped += 1;
            }
            ExecutionOutcome::Completed { status, .. } => {
                self.total_attempted += 1;
                if outcome.is_success() {
                    self.success_count += 1;
                } else {
                    self.failure_count += 1;
                    self.failures.push(FailedRequest {
                        method: endpoint.method.to_string(),
                        name: endpoint.name.clone(),
                        status: Some(*status),
                        error: None,
                    });
                }
            }
            ExecutionOutcome::TransportFailed { error, .. } => {
                self.total_attempted += 1;
                self.failure_count += 1;
                self.failures.push(FailedRequest {
                    method: endpoint.method.to_string(),
                    name: endpoint.name.clone(),
                    status: None,
                    error: Some(error.clone()),
                });
            }
        }
    }

    pub fn add_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}

/// Finalized, read-only view of a scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub base_url: String,
    pub total_attempted: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub findings: Vec<Finding>,
    pub failures: Vec<FailedRequest>,
}

impl ScanSummary {
    pub fn success_rate(&self) -> f64 {
        if self.total_attempted == 0 {
            return 0.0;
        }
        self.success_count as f64 / self.total_attempted as f64 * 100.0
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}
