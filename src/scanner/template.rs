use regex::Regex;

pub const BASE_URL_PLACEHOLDER: &str = "{{baseUrl}}";
pub const PATH_PARAM_SENTINEL: &str = "1";

/// Static placeholder substitution for collection URLs.
///
/// Path parameters always resolve to [`PATH_PARAM_SENTINEL`]; no value is
/// carried over from earlier responses, so routes that need a real resource
/// id created earlier in the run will usually answer 404.
pub struct TemplateResolver {
    named_placeholders: Vec<String>,
    colon_param: Regex,
    leftover: Regex,
}

impl TemplateResolver {
    pub fn new() -> Self {
        Self {
            named_placeholders: vec!["{{id}}".to_string(), "{{studentId}}".to_string()],
            colon_param: Regex::new(r":id\b").expect("static pattern"),
            leftover: Regex::new(r"\{\{[^{}]*\}\}").expect("static pattern"),
        }
    }

    pub fn with_placeholder(mut self, name: &str) -> Self {
        self.named_placeholders.push(format!("{{{{{}}}}}", name));
        self
    }

    /// Substitutes only the base URL, leaving path placeholders in place.
    pub fn resolve_base(&self, template: &str, base_url: &str) -> String {
        template.replace(BASE_URL_PLACEHOLDER, base_url)
    }

    pub fn resolve(&self, template: &str, base_url: &str) -> String {
        let mut resolved = self.resolve_base(template, base_url);

        for placeholder in &self.named_placeholders {
            resolved = resolved.replace(placeholder.as_str(), PATH_PARAM_SENTINEL);
        }

        let resolved = self.colon_param.replace_all(&resolved, PATH_PARAM_SENTINEL);
        self.leftover
            .replace_all(&resolved, PATH_PARAM_SENTINEL)
            .into_owned()
    }
}

impl Default for TemplateResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8080";

    #[test]
    fn test_base_url_substitution() {
        let resolver = TemplateResolver::new();
        assert_eq!(
            resolver.resolve("{{baseUrl}}/api/students", BASE),
            "http://localhost:8080/api/students"
        );
    }

    #[test]
    fn test_path_params_use_sentinel() {
        let resolver = TemplateResolver::new();
        assert_eq!(
            resolver.resolve("{{baseUrl}}/api/students/:id/lessons", BASE),
            "http://localhost:8080/api/students/1/lessons"
        );
        assert_eq!(
            resolver.resolve("{{baseUrl}}/api/students/{{studentId}}", BASE),
            "http://localhost:8080/api/students/1"
        );
    }

    #[test]
    fn test_colon_id_prefix_is_not_touched() {
        let resolver = TemplateResolver::new();
        assert_eq!(
            resolver.resolve("{{baseUrl}}/api/:identity", BASE),
            "http://localhost:8080/api/:identity"
        );
    }

    #[test]
    fn test_unknown_placeholder_falls_back_to_sentinel() {
        let resolver = TemplateResolver::new();
        assert_eq!(
            resolver.resolve("{{baseUrl}}/api/lessons/{{lessonId}}?page={{page}}", BASE),
            "http://localhost:8080/api/lessons/1?page=1"
        );
    }

    #[test]
    fn test_resolve_base_keeps_placeholder_names() {
        let resolver = TemplateResolver::new();
        assert_eq!(
            resolver.resolve_base("{{baseUrl}}/api/users/{{loginId}}", BASE),
            "http://localhost:8080/api/users/{{loginId}}"
        );
    }

    #[test]
    fn test_custom_placeholder() {
        let resolver = TemplateResolver::new().with_placeholder("tutorId");
        assert_eq!(resolver.resolve("/t/{{tutorId}}", BASE), "/t/1");
    }
}
