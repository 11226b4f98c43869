use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

use super::event::classify_line;
use super::report::{Report, ReportBuilder};

/// Read error that cut a scan short
#[derive(Debug, Error)]
#[error("scanner error after {lines} lines: {source}")]
pub struct ScanError {
    /// Number of complete lines classified before the error
    pub lines: usize,
    #[source]
    pub source: io::Error,
}

/// Result of scanning a log stream
#[derive(Debug)]
pub enum Scan {
    /// The whole stream was read
    Complete(Report),
    /// Reading stopped early; the report covers the lines read so far
    Partial { report: Report, error: ScanError },
}

impl Scan {
    pub fn report(&self) -> &Report {
        match self {
            Scan::Complete(report) | Scan::Partial { report, .. } => report,
        }
    }

    pub fn error(&self) -> Option<&ScanError> {
        match self {
            Scan::Complete(_) => None,
            Scan::Partial { error, .. } => Some(error),
        }
    }

    pub fn into_parts(self) -> (Report, Option<ScanError>) {
        match self {
            Scan::Complete(report) => (report, None),
            Scan::Partial { report, error } => (report, Some(error)),
        }
    }
}

/// Classify every line of `reader` until end of stream or the first read error.
///
/// Lines end at `\n` with an optional `\r` before it. Invalid UTF-8 is
/// replaced rather than treated as an error.
pub fn scan<R: BufRead>(mut reader: R) -> Scan {
    let mut builder = ReportBuilder::new();
    let mut buf = Vec::new();
    let mut lines = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(trim_line_ending(&buf));
                builder.record(classify_line(&line));
                lines += 1;
            }
            Err(source) => {
                return Scan::Partial {
                    report: builder.finish(),
                    error: ScanError { lines, source },
                };
            }
        }
    }

    debug!("Scanned {} lines", lines);
    Scan::Complete(builder.finish())
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
