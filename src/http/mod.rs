mod client;
mod transport;

pub use client::HttpClient;
pub use transport::{HttpRequest, HttpResponse, Transport};
