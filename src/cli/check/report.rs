//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A route that failed for a record.
#[derive(Debug, Clone)]
pub struct CheckFailure {
    pub route: String,
    pub reason: String,
}

/// Results of trying records against their routes.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of (record, route) pairs that produced a URL.
    pub passed: usize,
    /// Failures grouped by record reference.
    pub failures: BTreeMap<String, Vec<CheckFailure>>,
    /// Records whose route group has no routes at all.
    pub unrouted: Vec<String>,
}

impl CheckReport {
    pub fn add_failure(&mut self, record: String, route: String, reason: String) {
        self.failures
            .entry(record)
            .or_default()
            .push(CheckFailure { route, reason });
    }

    pub fn failure_count(&self) -> usize {
        self.failures.values().map(|v| v.len()).sum()
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Print failures grouped by record to stderr.
    pub fn print(&self) {
        if !self.unrouted.is_empty() {
            eprintln!();
            eprintln!(
                "{} {}",
                "unrouted".yellow().bold(),
                format!(
                    "({} record{} without routes)",
                    self.unrouted.len(),
                    plural_s(self.unrouted.len())
                )
                .dimmed()
            );
            for record in &self.unrouted {
                eprintln!("{} {}", "-".dimmed(), record);
            }
        }

        if self.failures.is_empty() {
            return;
        }
        eprintln!();

        let record_count = self.failures.len();
        let failure_count = self.failure_count();
        eprintln!(
            "{} {}",
            "failures".red().bold(),
            format!(
                "({record_count} record{}, {failure_count} route{})",
                plural_s(record_count),
                plural_s(failure_count)
            )
            .dimmed()
        );

        for (record, failures) in &self.failures {
            eprintln!("{}{}{}", "[".dimmed(), record.cyan(), "]".dimmed());
            for failure in failures {
                eprintln!("{} {} {}", "→".red(), failure.route, failure.reason);
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failures = self.failure_count();
        if failures == 0 {
            write!(
                f,
                "{} {}",
                "all checks passed".green(),
                format!("({} url{})", self.passed, plural_s(self.passed)).dimmed()
            )
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                failures.to_string().red().bold(),
                format!("failure{}", plural_s(failures)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        owo_colors::set_override(false);

        let mut report = CheckReport {
            passed: 3,
            ..Default::default()
        };
        assert!(report.is_ok());
        assert_eq!(report.to_string(), "all checks passed (3 urls)");

        report.add_failure("Thread:8".into(), "threads.show".into(), "missing `channel`".into());
        report.add_failure("Thread:8".into(), "threads.edit".into(), "missing `channel`".into());
        assert!(!report.is_ok());
        assert_eq!(report.failure_count(), 2);
        assert_eq!(report.to_string(), "found 2 failures");
    }
}
