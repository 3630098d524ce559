use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

use super::executor::EndpointExecutor;
use crate::models::{EndpointDescriptor, ScanAccumulator, SessionState};
use crate::reporter::ConsoleReporter;

/// Drives the executor over every descriptor, strictly one at a time.
pub struct Scanner {
    executor: EndpointExecutor,
    show_progress: bool,
}

pub struct ScanRun {
    pub accumulator: ScanAccumulator,
    pub duration_ms: u64,
}

impl Scanner {
    pub fn new(executor: EndpointExecutor) -> Self {
        Self {
            executor,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub async fn scan_all(
        &self,
        endpoints: &[EndpointDescriptor],
        session: &SessionState,
    ) -> ScanRun {
        let start = Instant::now();
        let pb = self.create_progress_bar(endpoints.len());
        let mut acc = ScanAccumulator::new();

        for endpoint in endpoints {
            pb.set_message(format!("{} {}", endpoint.method, endpoint.name));

            let outcome = self.executor.execute(endpoint, session, &mut acc).await;
            if let Some(line) = ConsoleReporter::status_line(endpoint, &outcome) {
                if pb.is_hidden() {
                    println!("{}", line);
                } else {
                    pb.println(line);
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message("Scan complete");

        ScanRun {
            accumulator: acc,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
