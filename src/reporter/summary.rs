use crate::models::{ScanAccumulator, ScanSummary};

pub struct ScanReporter;

impl ScanReporter {
    /// Pure read of the accumulator; nothing is printed here.
    pub fn report(acc: &ScanAccumulator) -> ScanSummary {
        ScanSummary {
            base_url: String::new(),
            total_attempted: acc.total_attempted,
            success_count: acc.success_count,
            failure_count: acc.failure_count,
            skipped: acc.skipped,
            duration_ms: 0,
            findings: acc.findings.clone(),
            failures: acc.failures.clone(),
        }
    }

    pub fn report_run(acc: &ScanAccumulator, base_url: &str, duration_ms: u64) -> ScanSummary {
        let mut summary = Self::report(acc);
        summary.base_url = base_url.to_string();
        summary.duration_ms = duration_ms;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Finding, FindingCategory};

    #[test]
    fn test_report_copies_counters() {
        let mut acc = ScanAccumulator::new();
        acc.total_attempted = 4;
        acc.success_count = 3;
        acc.failure_count = 1;
        acc.skipped = 2;
        acc.add_finding(Finding::new("search", FindingCategory::Injection, "500 on payload"));

        let summary = ScanReporter::report_run(&acc, "http://localhost:8080", 1500);
        assert_eq!(summary.total_attempted, 4);
        assert_eq!(summary.success_count, 3);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.findings.len(), 1);
        assert_eq!(summary.base_url, "http://localhost:8080");
        assert_eq!(summary.success_rate(), 75.0);
    }

    #[test]
    fn test_report_leaves_accumulator_intact() {
        let mut acc = ScanAccumulator::new();
        acc.add_finding(Finding::new("a", FindingCategory::CrossSiteScripting, "reflected"));
        let _ = ScanReporter::report(&acc);
        assert_eq!(acc.findings.len(), 1);
    }
}
