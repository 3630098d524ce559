use crate::models::{HttpMethod, SkipReason};

/// Substrings that mark auth-flow endpoints. Replaying them would reset or
/// mutate the scanning account.
pub const EXCLUDED_URL_SUBSTRINGS: &[&str] = &["login", "register", "logout"];

pub const DISPATCHABLE_METHODS: &[HttpMethod] = &[
    HttpMethod::Get,
    HttpMethod::Post,
    HttpMethod::Put,
    HttpMethod::Delete,
];

pub struct ExclusionPolicy {
    excluded_substrings: Vec<String>,
}

impl ExclusionPolicy {
    pub fn new(excluded_substrings: Vec<String>) -> Self {
        Self {
            excluded_substrings,
        }
    }

    pub fn excluded_by_url(&self, resolved_url: &str) -> Option<&str> {
        self.excluded_substrings
            .iter()
            .find(|s| resolved_url.contains(s.as_str()))
            .map(String::as_str)
    }

    pub fn is_dispatchable(method: &HttpMethod) -> bool {
        DISPATCHABLE_METHODS.contains(method)
    }

    pub fn check(&self, method: &HttpMethod, url: &str) -> Option<SkipReason> {
        if let Some(pattern) = self.excluded_by_url(url) {
            return Some(SkipReason::ExcludedPath(pattern.to_string()));
        }
        if !Self::is_dispatchable(method) {
            return Some(SkipReason::UnsupportedMethod(method.clone()));
        }
        None
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new(EXCLUDED_URL_SUBSTRINGS.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_urls_are_excluded() {
        let policy = ExclusionPolicy::default();
        assert_eq!(
            policy.excluded_by_url("http://h/api/auth/login"),
            Some("login")
        );
        assert_eq!(policy.excluded_by_url("http://h/api/register"), Some("register"));
        assert_eq!(policy.excluded_by_url("http://h/api/students"), None);
    }

    #[test]
    fn test_unsupported_methods_are_skipped() {
        let policy = ExclusionPolicy::default();
        assert_eq!(
            policy.check(&HttpMethod::Patch, "http://h/api/x"),
            Some(SkipReason::UnsupportedMethod(HttpMethod::Patch))
        );
        assert_eq!(policy.check(&HttpMethod::Delete, "http://h/api/x"), None);
    }

    #[test]
    fn test_url_exclusion_wins_over_method() {
        let policy = ExclusionPolicy::default();
        assert_eq!(
            policy.check(&HttpMethod::Head, "http://h/logout"),
            Some(SkipReason::ExcludedPath("logout".to_string()))
        );
    }
}
