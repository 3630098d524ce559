mod endpoint;
mod finding;
mod result;
mod session;

pub use endpoint::{EndpointDescriptor, HttpMethod};
pub use finding::{Finding, FindingCategory, Severity};
pub use result::{ExecutionOutcome, FailedRequest, ScanAccumulator, ScanSummary, SkipReason};
pub use session::{AUTHORIZATION_HEADER, Credentials, SessionState};
