use colored::Colorize;
use std::fmt::Write;
use tabled::{Table, Tabled, settings::{Style, Modify, object::Rows, Alignment}};

use crate::models::{EndpointDescriptor, ExecutionOutcome, ScanSummary, Severity};

const MAX_LISTED_FAILURES: usize = 10;

pub struct ConsoleReporter;

#[derive(Tabled)]
struct EndpointRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Body")]
    body: String,
}

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Endpoint")]
    endpoint: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

impl ConsoleReporter {
    /// One line per dispatched endpoint; skipped endpoints print nothing.
    pub fn status_line(endpoint: &EndpointDescriptor, outcome: &ExecutionOutcome) -> Option<String> {
        match outcome {
            ExecutionOutcome::Skipped(_) => None,
            ExecutionOutcome::Completed { status, elapsed_ms } => {
                let icon = if outcome.is_success() {
                    "✓".green()
                } else {
                    "✗".red()
                };
                Some(format!(
                    "[{}] {} {} | Status: {} | Time: {:.2}ms",
                    icon, endpoint.method, endpoint.name, status, elapsed_ms
                ))
            }
            ExecutionOutcome::TransportFailed { error, elapsed_ms } => Some(format!(
                "[{}] Error testing {} {}: {} | Time: {:.2}ms",
                "!".red().bold(),
                endpoint.method,
                endpoint.name,
                error,
                elapsed_ms
            )),
        }
    }

    pub fn render_summary(summary: &ScanSummary) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", "Scan Completed".bold().underline());
        if !summary.base_url.is_empty() {
            let _ = writeln!(out, "Target: {}", summary.base_url);
        }
        let _ = writeln!(out, "Total Requests: {}", summary.total_attempted);
        let _ = writeln!(out, "{}: {}", "Success (2xx)".green(), summary.success_count);
        let _ = writeln!(out, "{}: {}", "Failed".red(), summary.failure_count);
        if summary.skipped > 0 {
            let _ = writeln!(out, "Skipped: {}", summary.skipped);
        }
        let _ = writeln!(
            out,
            "Success rate: {:.1}% in {:.2}s",
            summary.success_rate(),
            summary.duration_ms as f64 / 1000.0
        );

        if !summary.failures.is_empty() {
            let _ = writeln!(out, "\n{}", "Failed Endpoints:".yellow());
            for failure in summary.failures.iter().take(MAX_LISTED_FAILURES) {
                let _ = writeln!(out, "- {} {}: {}", failure.method, failure.name, failure.reason());
            }
            if summary.failures.len() > MAX_LISTED_FAILURES {
                let _ = writeln!(
                    out,
                    "...and {} more.",
                    summary.failures.len() - MAX_LISTED_FAILURES
                );
            }
        }

        if summary.has_findings() {
            let _ = writeln!(out, "\n{}", "FOUND VULNERABILITIES:".red().bold());
            let _ = writeln!(out, "{}", Self::findings_table(summary));
        }

        out
    }

    pub fn print_summary(summary: &ScanSummary) {
        print!("{}", Self::render_summary(summary));
    }

    pub fn print_endpoints(endpoints: &[EndpointDescriptor]) {
        let rows: Vec<EndpointRow> = endpoints
            .iter()
            .enumerate()
            .map(|(i, ep)| EndpointRow {
                index: i + 1,
                method: ep.method.to_string(),
                name: ep.name.clone(),
                url: ep.url_template.clone(),
                body: if ep.body_template.is_some() { "yes" } else { "-" }.to_string(),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        println!("{}", table);
        println!("{} endpoints", endpoints.len().to_string().bold());
    }

    fn findings_table(summary: &ScanSummary) -> String {
        let mut findings: Vec<_> = summary.findings.iter().collect();
        findings.sort_by(|a, b| b.severity().numeric_value().cmp(&a.severity().numeric_value()));

        let rows: Vec<FindingRow> = findings
            .into_iter()
            .map(|f| FindingRow {
                severity: Self::severity_label(f.severity()),
                endpoint: f.endpoint_name.clone(),
                category: f.category.to_string(),
                detail: f.detail.clone(),
            })
            .collect();

        Table::new(rows).with(Style::rounded()).to_string()
    }

    fn severity_label(severity: Severity) -> String {
        match severity {
            Severity::High => "HIGH".red().to_string(),
            Severity::Medium => "MEDIUM".yellow().to_string(),
        }
    }
}
