mod console;
mod export;
mod summary;

pub use console::ConsoleReporter;
pub use export::{HtmlExporter, JsonExporter};
pub use summary::ScanReporter;
