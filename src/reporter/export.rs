use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use tera::{Context as TeraContext, Tera};

use crate::models::{ScanSummary, Severity};

pub struct JsonExporter;

impl JsonExporter {
    pub fn export(summary: &ScanSummary, path: &str) -> Result<()> {
        let output = ExportData {
            scan_time: Utc::now().to_rfc3339(),
            summary: summary.clone(),
        };

        let json = serde_json::to_string_pretty(&output)?;
        fs::write(path, json).with_context(|| format!("Failed to write to {}", path))?;
        Ok(())
    }

    pub fn load(path: &str) -> Result<ScanSummary> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;

        let data: ExportData = serde_json::from_str(&content)
            .with_context(|| format!("{} is not a saved scan", path))?;
        Ok(data.summary)
    }
}

pub struct HtmlExporter;

impl HtmlExporter {
    pub fn export(summary: &ScanSummary, path: &str) -> Result<()> {
        let html = Self::render(summary)?;
        fs::write(path, html).with_context(|| format!("Failed to write to {}", path))?;
        Ok(())
    }

    pub fn render(summary: &ScanSummary) -> Result<String> {
        let mut tera = Tera::default();
        tera.add_raw_template("report.html", TEMPLATE)?;

        let mut context = TeraContext::new();
        context.insert("scan_time", &Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string());
        context.insert("base_url", &summary.base_url);
        context.insert("total", &summary.total_attempted);
        context.insert("success", &summary.success_count);
        context.insert("failed", &summary.failure_count);
        context.insert("skipped", &summary.skipped);
        context.insert("success_rate", &format!("{:.1}", summary.success_rate()));

        let findings: Vec<FindingRow> = summary
            .findings
            .iter()
            .map(|f| FindingRow {
                endpoint: f.endpoint_name.clone(),
                category: f.category.to_string(),
                detail: f.detail.clone(),
                severity: f.severity().to_string(),
                severity_class: Self::severity_class(f.severity()),
            })
            .collect();
        context.insert("findings", &findings);

        let failures: Vec<FailureRow> = summary
            .failures
            .iter()
            .map(|f| FailureRow {
                method: f.method.clone(),
                name: f.name.clone(),
                reason: f.reason(),
            })
            .collect();
        context.insert("failures", &failures);

        Ok(tera.render("report.html", &context)?)
    }

    fn severity_class(severity: Severity) -> String {
        match severity {
            Severity::High => "high",
            Severity::Medium => "medium",
        }
        .to_string()
    }
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Postscan Report</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #0d1117; color: #c9d1d9; line-height: 1.6; }
        .container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
        h1 { color: #58a6ff; margin-bottom: 0.5rem; }
        h2 { margin: 2rem 0 1rem; }
        .subtitle { color: #8b949e; margin-bottom: 2rem; }
        .summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; }
        .stat { background: #161b22; border: 1px solid #30363d; border-radius: 6px; padding: 1rem; text-align: center; }
        .stat-value { font-size: 2rem; font-weight: bold; }
        .stat-label { color: #8b949e; font-size: 0.875rem; }
        .ok .stat-value { color: #3fb950; }
        .bad .stat-value { color: #f85149; }
        table { width: 100%; border-collapse: collapse; background: #161b22; border: 1px solid #30363d; }
        th, td { padding: 0.75rem 1rem; text-align: left; border-bottom: 1px solid #30363d; }
        th { background: #21262d; font-weight: 600; }
        .severity { padding: 0.25rem 0.5rem; border-radius: 4px; font-size: 0.75rem; font-weight: 600; }
        .severity.high { background: #f8514933; color: #f85149; }
        .severity.medium { background: #d2992233; color: #d29922; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Postscan Report</h1>
        <p class="subtitle">{{ base_url }} &middot; Generated: {{ scan_time }}</p>

        <div class="summary">
            <div class="stat"><div class="stat-value">{{ total }}</div><div class="stat-label">Requests</div></div>
            <div class="stat ok"><div class="stat-value">{{ success }}</div><div class="stat-label">Success (2xx)</div></div>
            <div class="stat bad"><div class="stat-value">{{ failed }}</div><div class="stat-label">Failed</div></div>
            <div class="stat"><div class="stat-value">{{ skipped }}</div><div class="stat-label">Skipped</div></div>
            <div class="stat"><div class="stat-value">{{ success_rate }}%</div><div class="stat-label">Success rate</div></div>
        </div>

        {% if findings %}
        <h2>Findings</h2>
        <table>
            <thead><tr><th>Severity</th><th>Endpoint</th><th>Category</th><th>Detail</th></tr></thead>
            <tbody>
                {% for f in findings %}
                <tr>
                    <td><span class="severity {{ f.severity_class }}">{{ f.severity }}</span></td>
                    <td>{{ f.endpoint }}</td>
                    <td>{{ f.category }}</td>
                    <td>{{ f.detail }}</td>
                </tr>
                {% endfor %}
            </tbody>
        </table>
        {% endif %}

        {% if failures %}
        <h2>Failed Requests</h2>
        <table>
            <thead><tr><th>Method</th><th>Endpoint</th><th>Status / Error</th></tr></thead>
            <tbody>
                {% for f in failures %}
                <tr><td>{{ f.method }}</td><td>{{ f.name }}</td><td>{{ f.reason }}</td></tr>
                {% endfor %}
            </tbody>
        </table>
        {% endif %}
    </div>
</body>
</html>"#;

#[derive(serde::Serialize, serde::Deserialize)]
struct ExportData {
    scan_time: String,
    summary: ScanSummary,
}

#[derive(serde::Serialize)]
struct FindingRow {
    endpoint: String,
    category: String,
    detail: String,
    severity: String,
    severity_class: String,
}

#[derive(serde::Serialize)]
struct FailureRow {
    method: String,
    name: String,
    reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Finding, FindingCategory};

    fn summary() -> ScanSummary {
        ScanSummary {
            base_url: "http://localhost:8080".to_string(),
            total_attempted: 3,
            success_count: 2,
            failure_count: 1,
            skipped: 0,
            duration_ms: 42,
            findings: vec![Finding::new(
                "Search",
                FindingCategory::CrossSiteScripting,
                "Payload reflected unescaped via 'q'",
            )],
            failures: Vec::new(),
        }
    }

    #[test]
    fn test_json_export_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.json");
        let path = path.to_str().unwrap();

        JsonExporter::export(&summary(), path).unwrap();
        let loaded = JsonExporter::load(path).unwrap();

        assert_eq!(loaded.total_attempted, 3);
        assert_eq!(loaded.findings, summary().findings);
    }

    #[test]
    fn test_html_escapes_finding_detail() {
        let mut s = summary();
        s.findings[0].detail = "<script>alert(1)</script>".to_string();
        let html = HtmlExporter::render(&s).unwrap();

        assert!(html.contains("Cross-Site Scripting"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<td><script>"));
    }

    #[test]
    fn test_html_marks_severity_class() {
        let mut s = summary();
        s.findings.push(Finding::new("Search", FindingCategory::Injection, "Status 500"));
        let html = HtmlExporter::render(&s).unwrap();

        assert!(html.contains(r#"<span class="severity medium">MEDIUM</span>"#));
        assert!(html.contains(r#"<span class="severity high">HIGH</span>"#));
    }

    #[test]
    fn test_load_rejects_foreign_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.json");
        fs::write(&path, r#"{"hello":"world"}"#).unwrap();

        assert!(JsonExporter::load(path.to_str().unwrap()).is_err());
    }
}
