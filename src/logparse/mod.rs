//! Go test log classification
//!
//! Scans a `go test -v` style job log line by line and accumulates which
//! tests never finished, which failed, and how many race and
//! undefined-symbol diagnostics were printed.

pub mod event;
pub mod report;
pub mod scanner;

pub use event::{classify_line, LineEvent};
pub use report::{Report, ReportBuilder};
pub use scanner::{scan, Scan, ScanError};
