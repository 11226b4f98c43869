const RUN_PREFIX: &str = "=== RUN   ";
const PASS_PREFIX: &str = "--- PASS: ";
const FAIL_PREFIX: &str = "--- FAIL: ";
const RACE_PREFIX: &str = "WARNING: DATA RACE";
const UNDEFINED_MARKER: &str = "undefined:";

/// Classification of a single log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent<'a> {
    /// `=== RUN   <name>`
    TestStarted(&'a str),
    /// `--- PASS: <name> (<duration>)`
    TestPassed(&'a str),
    /// `--- FAIL: <name> (<duration>)`
    TestFailed(&'a str),
    /// Race detector report header
    DataRace,
    /// Compiler error for an unresolved symbol
    UndefinedSymbol,
    Other,
}

/// Classify one line. The first matching rule wins.
pub fn classify_line(line: &str) -> LineEvent<'_> {
    if let Some(name) = line.strip_prefix(RUN_PREFIX) {
        LineEvent::TestStarted(name)
    } else if let Some(rest) = line.strip_prefix(PASS_PREFIX) {
        LineEvent::TestPassed(first_token(rest))
    } else if let Some(rest) = line.strip_prefix(FAIL_PREFIX) {
        LineEvent::TestFailed(first_token(rest))
    } else if line.starts_with(RACE_PREFIX) {
        LineEvent::DataRace
    } else if line.contains(UNDEFINED_MARKER) {
        LineEvent::UndefinedSymbol
    } else {
        LineEvent::Other
    }
}

/// Test name from the remainder of a PASS/FAIL line: everything up to the
/// first space. A leading space yields an empty name.
fn first_token(rest: &str) -> &str {
    rest.split(' ').next().unwrap_or("")
}
