use std::time::Duration;

use encoding_rs::UTF_8;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Decoded response body, owned by the fetcher until handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPayload {
    pub text: String,
    pub byte_len: u64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    #[error("invalid export url: {0}")]
    Address(String),
    #[error("server answered {code} {reason}")]
    Status { code: u16, reason: String },
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network fault: {0}")]
    Network(String),
}

#[async_trait::async_trait]
pub trait SheetFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<RawPayload, RetrievalError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, RetrievalError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| RetrievalError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl SheetFetcher for ReqwestFetcher {
    /// Single unauthenticated GET. No retries: any fault surfaces
    /// immediately.
    async fn fetch(&self, url: &str) -> Result<RawPayload, RetrievalError> {
        let parsed =
            url::Url::parse(url).map_err(|err| RetrievalError::Address(err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                code: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        // The sheet endpoint is assumed to serve UTF-8; bytes that do not
        // decode cleanly become replacement characters instead of an error.
        let (text, _, had_replacements) = UTF_8.decode(&bytes);
        if had_replacements {
            log::warn!("response body was not clean UTF-8; replacement characters inserted");
        }

        Ok(RawPayload {
            text: text.into_owned(),
            byte_len: bytes.len() as u64,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RetrievalError {
    if err.is_timeout() {
        return RetrievalError::Timeout(err.to_string());
    }
    RetrievalError::Network(err.to_string())
}
