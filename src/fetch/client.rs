use reqwest::blocking::{Client, Response};
use std::io::{self, BufReader, Read};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::job::JobLog;

/// Failure to obtain any log data at all
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to get txt log from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Downloads job logs over HTTP
pub struct LogFetcher {
    client: Client,
    timeout: Option<Duration>,
}

impl LogFetcher {
    /// Fetcher without any request timeout; the body is read for as long as it takes
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(None)
    }

    /// `timeout` bounds the whole request including the body read.
    /// `None` disables reqwest's 30s default.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, timeout })
    }

    /// Issue a single GET for the job's raw log.
    ///
    /// Any HTTP status is accepted; the body is returned for scanning either way.
    pub fn fetch(&self, job: &JobLog) -> Result<LogBody, FetchError> {
        debug!("Fetching {} (timeout {:?})", job.log_url, self.timeout);
        let response = self
            .client
            .get(&job.log_url)
            .send()
            .map_err(|source| FetchError::Request {
                url: job.log_url.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            debug!("GET {} -> {}", job.log_url, status);
        } else {
            warn!("GET {} -> {}, scanning body anyway", job.log_url, status);
        }

        Ok(LogBody {
            reader: BufReader::new(response),
        })
    }
}

/// Response body of a log request.
///
/// The connection is released when this value is dropped.
pub struct LogBody {
    reader: BufReader<Response>,
}

impl Read for LogBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl io::BufRead for LogBody {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt)
    }
}
