mod collection;
mod engine;
mod executor;
mod policy;
mod template;

pub use collection::CollectionLoader;
pub use engine::{ScanRun, Scanner};
pub use executor::EndpointExecutor;
pub use policy::{DISPATCHABLE_METHODS, EXCLUDED_URL_SUBSTRINGS, ExclusionPolicy};
pub use template::{BASE_URL_PLACEHOLDER, PATH_PARAM_SENTINEL, TemplateResolver};
