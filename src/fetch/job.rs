use crate::app::config::{TravisConfig, JOB_ID_PLACEHOLDER};

/// Travis job identifier, either given directly or cut out of a viewer URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobId(String);

impl JobId {
    /// Parse a bare job ID or a job-viewer URL.
    ///
    /// No validation is applied: an empty or non-numeric input is kept as is.
    pub fn parse(input: &str, travis: &TravisConfig) -> Self {
        let id = input.strip_prefix(travis.viewer_prefix.as_str()).unwrap_or(input);
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The URLs derived from one job ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLog {
    pub id: JobId,
    /// Plain-text log endpoint
    pub log_url: String,
    /// Human-viewable job page
    pub viewer_url: String,
}

impl JobLog {
    pub fn new(id: JobId, travis: &TravisConfig) -> Self {
        let log_url = travis
            .log_url_template
            .replace(JOB_ID_PLACEHOLDER, id.as_str());
        let viewer_url = format!("{}{}", travis.viewer_prefix, id);
        Self {
            id,
            log_url,
            viewer_url,
        }
    }

    /// Shorthand for parsing the identifier and deriving its URLs
    pub fn resolve(input: &str, travis: &TravisConfig) -> Self {
        Self::new(JobId::parse(input, travis), travis)
    }
}
