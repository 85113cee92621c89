//! Meraki Dashboard API client.
//!
//! Low-level HTTP client that handles authentication, request dispatch and
//! status classification. Entity operations are implemented via traits on
//! the model types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{MerakiError, Result};
use crate::logging::{log_event, Level};
use crate::status::StatusClass;

/// Default Meraki Dashboard API base URL.
pub const DEFAULT_API_URL: &str = "https://api.meraki.com/api/v1";

/// Header carrying the API key (`X-Cisco-Meraki-API-Key`).
pub const API_KEY_HEADER: &str = "x-cisco-meraki-api-key";

/// Key variable read by older tooling; used when `MERAKI_API_KEY` is unset.
pub const LEGACY_API_KEY_ENV: &str = "meraki_key";

const USER_AGENT: &str = concat!("meraki-sdk/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for [`MerakiClient`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Dashboard API key.
    pub api_key: String,
    /// Base URL (defaults to [`DEFAULT_API_URL`]).
    pub base_url: String,
    /// Verify the server's TLS certificate.
    pub verify_tls: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("verify_tls", &self.verify_tls)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Create a config with default base URL, TLS verification off and a 60 s timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            verify_tls: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the config from environment variables.
    ///
    /// Uses `MERAKI_API_KEY` (or the legacy `meraki_key`) for the key,
    /// `MERAKI_API_URL` for the base URL and `MERAKI_VERIFY_TLS` for the
    /// verification flag.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("MERAKI_API_KEY")
            .or_else(|_| env::var(LEGACY_API_KEY_ENV))
            .map_err(|_| {
                MerakiError::ConfigMissing(
                    "MERAKI_API_KEY environment variable not set".to_string(),
                )
            })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("MERAKI_API_URL") {
            config.base_url = base_url;
        }
        if let Ok(verify) = env::var("MERAKI_VERIFY_TLS") {
            config.verify_tls = parse_flag(&verify);
        }
        Ok(config)
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Enable or disable TLS certificate verification.
    #[must_use]
    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Low-level Meraki Dashboard API client.
///
/// Every request carries the JSON `Accept`/`Content-Type` headers and the
/// API key header. Responses are classified by [`StatusClass`]: 2xx is
/// returned, everything else becomes a [`MerakiError`] after being logged.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use meraki_sdk::MerakiClient;
///
/// # async fn example() -> meraki_sdk::Result<()> {
/// // Create from environment variables
/// let client = MerakiClient::from_env()?;
///
/// // Or configure manually
/// let client = MerakiClient::new("your-api-key", "https://api.meraki.com/api/v1", true)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MerakiClient {
    http: Client,
    base_url: Arc<Url>,
    verify_tls: bool,
}

impl std::fmt::Debug for MerakiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerakiClient")
            .field("base_url", &self.base_url.as_str())
            .field("verify_tls", &self.verify_tls)
            .finish_non_exhaustive()
    }
}

impl MerakiClient {
    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is set or the base URL is invalid.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client with the provided key, base URL and TLS flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or the API key is invalid.
    pub fn new(api_key: &str, base_url: &str, verify_tls: bool) -> Result<Self> {
        Self::with_config(
            ClientConfig::new(api_key)
                .with_base_url(base_url)
                .with_verify_tls(verify_tls),
        )
    }

    /// Create a client from an explicit [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or the API key is invalid.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if config.base_url.ends_with('/') {
            config.base_url.clone()
        } else {
            format!("{}/", config.base_url)
        };
        let base_url = Url::parse(&base_url_str)?;

        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| MerakiError::InvalidInput("API key contains invalid characters".into()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, key);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .danger_accept_invalid_certs(!config.verify_tls)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout)
            .build()
            .map_err(MerakiError::Http)?;

        if !config.verify_tls {
            log_event(Level::Info, "VerifySSL", "False");
        }

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            verify_tls: config.verify_tls,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether TLS certificates are verified.
    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Resolve a resource path such as `/organizations` against the base URL.
    pub fn url(&self, resource: &str) -> Result<Url> {
        Ok(self.base_url.join(resource.trim_start_matches('/'))?)
    }

    /// Issue one request and classify the response.
    ///
    /// The JSON body is only sent when `payload` is `Some`. Non-success
    /// statuses are logged and returned as errors; fatal statuses
    /// (401, 403, 429) become [`MerakiError::Fatal`].
    #[tracing::instrument(skip(self, payload))]
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        resource: &str,
        payload: Option<&B>,
    ) -> Result<Response> {
        let url = self.url(resource)?;

        let mut builder = self.http.request(method, url);
        if let Some(body) = payload {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(MerakiError::Http)?;

        Self::check_response(response).await
    }

    /// Make a GET request.
    pub async fn get(&self, resource: &str) -> Result<Response> {
        self.request::<()>(Method::GET, resource, None).await
    }

    /// Make a POST request with JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, resource: &str, body: &B) -> Result<Response> {
        self.request(Method::POST, resource, Some(body)).await
    }

    /// Make a PUT request with JSON body.
    pub async fn put<B: Serialize + ?Sized>(&self, resource: &str, body: &B) -> Result<Response> {
        self.request(Method::PUT, resource, Some(body)).await
    }

    /// GET a resource and decode its JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let response = self.get(resource).await?;
        response.json().await.map_err(MerakiError::Http)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status().as_u16();
        let class = StatusClass::classify(status);

        let into_error: fn(u16, String) -> MerakiError = match class {
            StatusClass::Success => {
                log_event(class.log_level(), class.log_type(), status);
                return Ok(response);
            }
            StatusClass::RequestError => |status, body| MerakiError::Request { status, body },
            StatusClass::Fatal => |status, body| MerakiError::Fatal { status, body },
            StatusClass::Unexpected => |status, body| MerakiError::Api { status, body },
        };

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| format!("HTTP {status}"));
        log_event(
            class.log_level(),
            class.log_type(),
            format_args!("{status} - {body}"),
        );

        Err(into_error(status, body))
    }
}

/// Log a mutation's success message when the API answered 200 or 201.
pub(crate) fn log_created(response: &Response, log_type: &str, message: impl std::fmt::Display) {
    if matches!(response.status().as_u16(), 200 | 201) {
        log_event(Level::Info, log_type, message);
    }
}

/// Percent-encode one path segment taken from caller input.
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
