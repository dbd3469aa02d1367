//! Client configuration
//!
//! Resolved once at startup from CLI options (which clap backs with
//! environment variables) and passed into `OpenAIClient::new`.

use std::time::Duration;

use crate::errors::{GptsError, GptsResult};

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_GPTS_ID: &str = "OPENAI_GPTS_ID";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_TIMEOUT: &str = "OPENAI_TIMEOUT_SECS";

#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub assistant_id: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

    /// Build a config from possibly-missing values.
    ///
    /// Key and assistant id are required; blank values count as missing.
    /// The base URL must be absolute and the timeout non-zero.
    pub fn new(
        api_key: Option<String>,
        assistant_id: Option<String>,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> GptsResult<Self> {
        let api_key = non_blank(api_key).ok_or(GptsError::MissingEnv(ENV_API_KEY))?;
        let assistant_id = non_blank(assistant_id).ok_or(GptsError::MissingEnv(ENV_GPTS_ID))?;
        let base_url = non_blank(base_url)
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if reqwest::Url::parse(&base_url).map_or(true, |u| u.cannot_be_a_base()) {
            return Err(GptsError::InvalidConfig(format!(
                "{ENV_BASE_URL} is not a valid URL: {base_url}"
            )));
        }
        let timeout_secs = timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(GptsError::InvalidConfig(format!(
                "{ENV_TIMEOUT} must be at least 1 second"
            )));
        }
        let timeout = Duration::from_secs(timeout_secs);

        Ok(Self {
            api_key,
            assistant_id,
            base_url,
            timeout,
        })
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("assistant_id", &self.assistant_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
