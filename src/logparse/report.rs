use std::collections::{BTreeMap, BTreeSet};

use super::event::LineEvent;

/// Summary of one job log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Tests that started but never passed or failed
    pub running: BTreeSet<String>,
    /// Failed tests and how many times each failed
    pub failures: BTreeMap<String, usize>,
    pub races: usize,
    pub undefined: usize,
}

impl Report {
    /// True when none of the summary sections would be printed
    pub fn is_clean(&self) -> bool {
        self.running.is_empty() && self.failures.is_empty() && self.races == 0 && self.undefined == 0
    }
}

/// Accumulates line events into a [`Report`]
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: LineEvent<'_>) {
        let report = &mut self.report;
        match event {
            LineEvent::TestStarted(name) => {
                report.running.insert(name.to_string());
            }
            LineEvent::TestPassed(name) => {
                report.running.remove(name);
            }
            LineEvent::TestFailed(name) => {
                report.running.remove(name);
                *report.failures.entry(name.to_string()).or_insert(0) += 1;
            }
            LineEvent::DataRace => report.races += 1,
            LineEvent::UndefinedSymbol => report.undefined += 1,
            LineEvent::Other => {}
        }
    }

    pub fn finish(self) -> Report {
        self.report
    }
}
