use std::fmt::Write as _;
use std::io::{self, Write};

use crate::fetch::JobLog;
use crate::logparse::Report;

/// サマリーを文字列として描画
pub fn render(job: &JobLog, report: &Report) -> String {
    let mut out = String::new();

    // ヘッダー（常に出力）
    out.push('\n');
    let _ = writeln!(out, "rawLog: {}", job.log_url);
    out.push('\n');
    let _ = writeln!(out, "url: {}", job.viewer_url);
    out.push('\n');

    if !report.running.is_empty() {
        out.push_str("tests started but did not finish:\n");
        for name in &report.running {
            let _ = writeln!(out, " - {}", name);
        }
    }

    if !report.failures.is_empty() {
        out.push_str("tests failed:\n");
        for name in report.failures.keys() {
            let _ = writeln!(out, " - {}", name);
        }
    }

    if report.races > 0 {
        let _ = writeln!(out, "number of races: {}", report.races);
    }

    if report.undefined > 0 {
        let _ = writeln!(out, "number of undefined: {}", report.undefined);
    }

    out
}

/// 標準出力へ書き出す
pub fn print(job: &JobLog, report: &Report) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render(job, report).as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::TravisConfig;

    fn job() -> JobLog {
        JobLog::resolve("12345", &TravisConfig::default())
    }

    const HEADER: &str = "\nrawLog: https://api.travis-ci.org/jobs/12345/log.txt?deansi=true\n\nurl: https://travis-ci.org/grpc/grpc-go/jobs/12345\n\n";

    #[test]
    fn test_render_header_only() {
        assert_eq!(render(&job(), &Report::default()), HEADER);
    }

    #[test]
    fn test_render_all_sections() {
        let mut report = Report::default();
        report.running.insert("TestZeta".to_string());
        report.running.insert("TestAlpha".to_string());
        report.failures.insert("TestBaz".to_string(), 2);
        report.failures.insert("TestBar".to_string(), 1);
        report.races = 3;
        report.undefined = 1;

        let expected = format!(
            "{HEADER}\
tests started but did not finish:
 - TestAlpha
 - TestZeta
tests failed:
 - TestBar
 - TestBaz
number of races: 3
number of undefined: 1
"
        );
        assert_eq!(render(&job(), &report), expected);
    }

    #[test]
    fn test_render_skips_empty_sections() {
        let report = Report {
            undefined: 4,
            ..Report::default()
        };
        let out = render(&job(), &report);
        assert!(out.ends_with("\n\nnumber of undefined: 4\n"));
        assert!(!out.contains("tests failed:"));
        assert!(!out.contains("tests started"));
        assert!(!out.contains("number of races"));
    }
}
