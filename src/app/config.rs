use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Placeholder replaced by the job ID in [`TravisConfig::log_url_template`]
pub const JOB_ID_PLACEHOLDER: &str = "{id}";

/// Travis CIのエンドポイント設定
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TravisConfig {
    /// ジョブ閲覧URLのプレフィックス（末尾がジョブID）
    #[serde(default = "default_viewer_prefix")]
    pub viewer_prefix: String,
    /// 生ログ取得URLのテンプレート（`{id}` を置換）
    #[serde(default = "default_log_url_template")]
    pub log_url_template: String,
}

fn default_viewer_prefix() -> String {
    "https://travis-ci.org/grpc/grpc-go/jobs/".to_string()
}

fn default_log_url_template() -> String {
    "https://api.travis-ci.org/jobs/{id}/log.txt?deansi=true".to_string()
}

impl Default for TravisConfig {
    fn default() -> Self {
        Self {
            viewer_prefix: default_viewer_prefix(),
            log_url_template: default_log_url_template(),
        }
    }
}

/// HTTP設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// リクエスト全体（本文の読み込みを含む）のタイムアウト秒数。未設定なら無制限
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// アプリケーション設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub travis: TravisConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Load a config file, falling back to defaults for missing keys
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// 設定値の整合性チェック
    pub fn validate(&self) -> Result<()> {
        if !self.travis.log_url_template.contains(JOB_ID_PLACEHOLDER) {
            anyhow::bail!(
                "log_url_template must contain {}: {}",
                JOB_ID_PLACEHOLDER,
                self.travis.log_url_template
            );
        }
        Ok(())
    }
}
