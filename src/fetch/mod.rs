//! Job log retrieval
//!
//! Resolves a job identifier into its raw-log URL and downloads the log
//! with a single blocking GET.

pub mod client;
pub mod job;

pub use client::{FetchError, LogBody, LogFetcher};
pub use job::{JobId, JobLog};
