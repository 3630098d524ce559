use serde_json::Value;

/// A response layout that may hold the access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape {
    /// `{"data": {"accessToken": "..."}}`
    NestedData,
    /// `{"accessToken": "..."}`
    TopLevel,
}

impl TokenShape {
    pub fn extract(&self, body: &Value) -> Option<String> {
        let candidate = match self {
            TokenShape::NestedData => body.get("data").and_then(|d| d.get("accessToken")),
            TokenShape::TopLevel => body.get("accessToken"),
        };

        candidate
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}

/// Tries each shape in order; the first hit wins.
pub struct TokenExtractor {
    shapes: Vec<TokenShape>,
}

impl TokenExtractor {
    pub fn new(shapes: Vec<TokenShape>) -> Self {
        Self { shapes }
    }

    pub fn extract(&self, body: &Value) -> Option<String> {
        self.shapes.iter().find_map(|shape| shape.extract(body))
    }
}

impl Default for TokenExtractor {
    fn default() -> Self {
        Self::new(vec![TokenShape::NestedData, TokenShape::TopLevel])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_shape() {
        let body = json!({"data": {"accessToken": "X"}});
        assert_eq!(TokenExtractor::default().extract(&body), Some("X".to_string()));
    }

    #[test]
    fn test_top_level_shape() {
        let body = json!({"accessToken": "Y"});
        assert_eq!(TokenExtractor::default().extract(&body), Some("Y".to_string()));
    }

    #[test]
    fn test_nested_wins_over_top_level() {
        let body = json!({"accessToken": "top", "data": {"accessToken": "nested"}});
        assert_eq!(
            TokenExtractor::default().extract(&body),
            Some("nested".to_string())
        );
    }

    #[test]
    fn test_no_matching_shape() {
        let body = json!({"token": "Z", "data": {"refreshToken": "R"}});
        assert_eq!(TokenExtractor::default().extract(&body), None);
    }

    #[test]
    fn test_non_string_token_is_ignored() {
        let body = json!({"accessToken": 42});
        assert_eq!(TokenShape::TopLevel.extract(&body), None);
    }
}
