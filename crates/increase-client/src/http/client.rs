/*
[INPUT]:  HTTP configuration (environment, base URL, timeouts, API key)
[OUTPUT]: Configured reqwest client with auth, idempotency and retries
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use super::error::{IncreaseError, Result};
use super::retry::{RetryPolicy, parse_retry_after};

/// Base URLs for the Increase API
const PRODUCTION_BASE_URL: &str = "https://api.increase.com";
const SANDBOX_BASE_URL: &str = "https://sandbox.increase.com";

const API_KEY_ENV: &str = "INCREASE_API_KEY";
const BASE_URL_ENV: &str = "INCREASE_BASE_URL";
const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";
const USER_AGENT: &str = concat!("increase-client-rust/", env!("CARGO_PKG_VERSION"));

/// Which Increase deployment to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub environment: Environment,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_retries: u32,
    /// First backoff step; later steps double up to 8s
    pub initial_retry_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            environment: Environment::default(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            max_retries: retry.max_retries,
            initial_retry_delay: retry.initial_delay,
        }
    }
}

impl ClientConfig {
    pub fn sandbox() -> Self {
        Self {
            environment: Environment::Sandbox,
            ..Self::default()
        }
    }

    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_delay: self.initial_retry_delay,
            ..RetryPolicy::default()
        }
    }
}

/// Main HTTP client for the Increase API
pub struct IncreaseClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
    retry: RetryPolicy,
}

impl fmt::Debug for IncreaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncreaseClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("retry", &self.retry)
            .finish()
    }
}

impl IncreaseClient {
    /// Create a new client against production with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let base_url = config.environment.base_url();
        Self::with_config_and_base_url(api_key, config, base_url)
    }

    /// Create a new client pointed at an explicit base URL (mocks, proxies)
    pub fn with_config_and_base_url(
        api_key: impl Into<String>,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(IncreaseError::Config("API key must not be empty".to_string()));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
            api_key,
            retry: config.retry_policy(),
        })
    }

    /// Build a client from `INCREASE_API_KEY` and, if set, `INCREASE_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_config(ClientConfig::default())
    }

    pub fn from_env_with_config(config: ClientConfig) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| IncreaseError::Config(format!("{API_KEY_ENV} is not set")))?;

        match std::env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.trim().is_empty() => {
                Self::with_config_and_base_url(api_key, config, &base_url)
            }
            _ => Self::with_config(api_key, config),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint path
    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build an authenticated request builder
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self
            .http_client
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, HeaderValue::from_static("application/json")))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let builder = self.request(Method::GET, endpoint)?.query(query);
        self.send_json(builder).await
    }

    /// POST with a fresh idempotency key that is reused across retries
    pub(crate) async fn post_json<B, T>(&self, endpoint: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut builder = self
            .request(Method::POST, endpoint)?
            .header(IDEMPOTENCY_HEADER, Uuid::new_v4().to_string());
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send_json(builder).await
    }

    /// Send a request, retrying transient failures, and decode the JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let mut attempt: u32 = 0;

        loop {
            let request = builder
                .try_clone()
                .ok_or_else(|| IncreaseError::Config("request body is not replayable".to_string()))?
                .build()?;
            debug!(
                method = %request.method(),
                url = %request.url(),
                attempt,
                "sending Increase request"
            );

            let (error, server_delay) = match self.http_client.execute(request).await {
                Ok(response) if response.status().is_success() => {
                    return decode_body(response).await;
                }
                Ok(response) => {
                    let status = response.status();
                    let server_delay = parse_retry_after(response.headers());
                    let body = match response.text().await {
                        Ok(body) => body,
                        Err(err) => {
                            warn!(status = %status, error = %err, "failed to read Increase error body");
                            String::new()
                        }
                    };
                    (status_error(status, &body, server_delay), server_delay)
                }
                Err(err) => (IncreaseError::Http(err), None),
            };

            if attempt >= self.retry.max_retries || !error.is_retryable() {
                debug!(attempt, error = %error, "Increase request failed");
                return Err(error);
            }

            let delay = self.retry.delay(attempt, server_delay);
            warn!(
                attempt,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "retrying Increase request"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(IncreaseError::from)
}

fn status_error(status: StatusCode, body: &str, server_delay: Option<Duration>) -> IncreaseError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return IncreaseError::RateLimit {
            retry_after: server_delay.map_or(0, |delay| delay.as_secs()),
        };
    }
    IncreaseError::from_response(status, body)
}

/// Ensure the base URL ends in `/` so relative joins keep any path prefix
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Validate an object id before it is spliced into a path
pub(crate) fn path_segment<'a>(name: &str, id: &'a str) -> Result<&'a str> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(id)
    } else {
        Err(IncreaseError::Config(format!(
            "`{name}` must be a non-empty object id, got {id:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::Production.base_url(), "https://api.increase.com");
        assert_eq!(Environment::Sandbox.base_url(), "https://sandbox.increase.com");
        assert_eq!(ClientConfig::sandbox().environment, Environment::Sandbox);
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = IncreaseClient::new("  ").unwrap_err();
        assert!(matches!(err, IncreaseError::Config(_)));
    }

    #[test]
    fn test_base_url_keeps_prefix() {
        let client = IncreaseClient::with_config_and_base_url(
            "test-key",
            ClientConfig::default(),
            "http://localhost:8080/increase",
        )
        .unwrap();
        assert_eq!(
            client.url("/simulations/documents").unwrap().as_str(),
            "http://localhost:8080/increase/simulations/documents"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = IncreaseClient::new("secret_sandbox_key").unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret_sandbox_key"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn test_path_segment_validation() {
        assert!(path_segment("transfer_id", "ach_transfer_uoxatyh3lt5evrsdvo7q").is_ok());
        assert!(path_segment("transfer_id", "").is_err());
        assert!(path_segment("transfer_id", "../accounts").is_err());
        assert!(path_segment("transfer_id", "a?b=c").is_err());
    }
}
