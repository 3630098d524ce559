use regex::RegexSet;

/// Response-body patterns that betray a database error leaking through.
pub struct SqlErrorSignatures {
    patterns: RegexSet,
}

impl SqlErrorSignatures {
    pub fn new() -> Self {
        let patterns = RegexSet::new([
            r"(?i)you have an error in your sql syntax",
            r"(?i)unclosed quotation mark",
            r"(?i)quoted string not properly terminated",
            r"(?i)sqlstate\[",
            r"(?i)org\.postgresql\.util\.PSQLException",
            r"(?i)syntax error at or near",
            r"(?i)sqlite3?::|sqlite_error",
            r"(?i)ORA-\d{5}",
            r"(?i)java\.sql\.SQLException",
            r"(?i)org\.hibernate\.exception",
            r"(?i)bad sql grammar",
        ])
        .expect("static patterns");

        Self { patterns }
    }

    pub fn matches(&self, body: &str) -> bool {
        self.patterns.is_match(body)
    }
}

impl Default for SqlErrorSignatures {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_common_driver_errors() {
        let signatures = SqlErrorSignatures::new();
        assert!(signatures.matches("ERROR: syntax error at or near \"OR\""));
        assert!(signatures.matches("org.postgresql.util.PSQLException: boom"));
        assert!(signatures.matches("You have an error in your SQL syntax; check the manual"));
        assert!(signatures.matches("ORA-01756: quoted string not properly terminated"));
    }

    #[test]
    fn test_ignores_ordinary_bodies() {
        let signatures = SqlErrorSignatures::new();
        assert!(!signatures.matches(r#"{"data":[],"message":"ok"}"#));
        assert!(!signatures.matches("Not Found"));
    }
}
