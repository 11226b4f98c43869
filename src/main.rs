use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use test_log_parse::app::Config;
use test_log_parse::fetch::{JobLog, LogFetcher};
use test_log_parse::logparse;
use test_log_parse::ui::summary;

/// Summarize unfinished tests, failures, data races and undefined symbols in a CI job log
#[derive(Parser)]
#[command(name = "test-log-parse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job ID or job URL (https://travis-ci.org/grpc/grpc-go/jobs/<id>)
    log: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// TOML file overriding the CI endpoints
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Anything after the job is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(log) = cli.log.as_deref() else {
        println!("log url not found");
        return ExitCode::FAILURE;
    };

    // ログ初期化
    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Failed to initialize logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    if !cli.ignored.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.ignored);
    }

    match run(log, cli.config.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(log: &str, config_path: Option<&std::path::Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };

    let job = JobLog::resolve(log, &config.travis);
    info!("Summarizing job {}", job.id);

    let fetcher = LogFetcher::with_timeout(config.http.timeout())?;
    let body = fetcher.fetch(&job)?;

    // bodyはscan終了時にdropされ、接続も解放される
    let (report, scan_error) = logparse::scan(body).into_parts();
    if let Some(e) = scan_error {
        warn!("{}", e);
    }
    if report.is_clean() {
        info!("No problems found in job {}", job.id);
    }

    summary::print(&job, &report).context("Failed to write report")?;
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
