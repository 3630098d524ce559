pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod probes;
pub mod reporter;
pub mod scanner;

pub use auth::{AuthManager, TokenExtractor, TokenShape};
pub use config::ScanConfig;
pub use error::{AuthError, CollectionError, ConfigError, TransportError};
pub use http::{HttpClient, HttpRequest, HttpResponse, Transport};
pub use models::{
    Credentials, EndpointDescriptor, ExecutionOutcome, Finding, FindingCategory, HttpMethod,
    ScanAccumulator, ScanSummary, SessionState, Severity,
};
pub use probes::{InjectionProbe, Probe, ProbeRegistry, ProbeTarget};
pub use reporter::{ConsoleReporter, HtmlExporter, JsonExporter, ScanReporter};
pub use scanner::{CollectionLoader, EndpointExecutor, Scanner};
