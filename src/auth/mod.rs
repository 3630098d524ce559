mod manager;
mod token;

pub use manager::{AuthManager, LOGIN_PATH};
pub use token::{TokenExtractor, TokenShape};
