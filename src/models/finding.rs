use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn numeric_value(&self) -> u8 {
        match self {
            Severity::High => 2,
            Severity::Medium => 1,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingCategory {
    Injection,
    CrossSiteScripting,
}

impl FindingCategory {
    pub fn severity(&self) -> Severity {
        match self {
            FindingCategory::Injection => Severity::High,
            FindingCategory::CrossSiteScripting => Severity::Medium,
        }
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FindingCategory::Injection => "SQL Injection",
            FindingCategory::CrossSiteScripting => "Cross-Site Scripting",
        };
        write!(f, "{}", s)
    }
}

/// A suspected vulnerability attributed to a single endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub endpoint_name: String,
    pub category: FindingCategory,
    pub detail: String,
}

impl Finding {
    pub fn new(
        endpoint_name: impl Into<String>,
        category: FindingCategory,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            endpoint_name: endpoint_name.into(),
            category,
            detail: detail.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.category.severity()
    }
}
