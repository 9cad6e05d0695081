//! # Backend Infrastructure
//!
//! This crate provides a unified interface to the managed backend project that
//! owns data, authentication accounts, and remote functions. The project is an
//! opaque external service reached over HTTP; this adapter never reimplements
//! its storage or auth semantics.
//!
//! ## Key Features
//! - **Resilient Connectivity**: Built-in retry logic for health checks during startup.
//! - **Builder Pattern**: Fluent API for configuring the project URL and public API key.
//! - **Administrative Reset**: The single destructive remote call, guarded by an
//!   exact confirmation token and never retried.
//!
//! ## Example
//!
//! ```rust,no_run
//! use maison_backend::{Backend, BackendError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), BackendError> {
//!     let backend = Backend::builder()
//!         .url("http://localhost:54321")
//!         .api_key("dev-anon-key")
//!         .init()
//!         .await?;
//!
//!     backend.health().await?;
//!     Ok(())
//! }
//! ```

mod error;

pub use error::{BackendError, BackendErrorExt};

use maison_domain::constants::RESET_CONFIRMATION;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Header carrying the public API key, in addition to the bearer token.
const API_KEY_HEADER: &str = "apikey";
/// Health probe endpoint of the managed project.
const HEALTH_PATH: &str = "auth/v1/health";
/// Remote function that wipes all user data and authentication accounts.
const RESET_FUNCTION_PATH: &str = "functions/v1/reset-project";
/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ResetRequest<'a> {
    confirm: &'a str,
}

/// Inner state of the [`Backend`] wrapper.
#[derive(Debug)]
pub struct BackendInner {
    http: reqwest::Client,
    base_url: String,
}

impl Drop for BackendInner {
    fn drop(&mut self) {
        info!(url = %self.base_url, "Backend handle dropped");
    }
}

/// Managed backend client wrapper providing thread-safety and contextual errors.
#[derive(Debug, Clone)]
pub struct Backend {
    inner: Arc<BackendInner>,
}

impl Backend {
    /// Creates a new [`BackendBuilder`].
    pub fn builder() -> BackendBuilder {
        BackendBuilder::new()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }

    /// Probes the project's health endpoint once.
    ///
    /// # Errors
    /// * [`BackendError::Http`] on transport failures.
    /// * [`BackendError::Connection`] when the project answers unhealthy.
    pub async fn health(&self) -> Result<(), BackendError> {
        let response = self
            .inner
            .http
            .get(self.endpoint(HEALTH_PATH))
            .send()
            .await
            .context("Probing backend health")?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(BackendError::Connection {
                message: format!("Health probe answered {}", response.status()).into(),
                context: None,
            })
        }
    }

    /// Invokes the destructive administrative reset: the remote function wipes
    /// all user data and authentication accounts of the project.
    ///
    /// The exact confirmation token must be supplied; a mismatch is rejected
    /// locally before any network traffic. Any error is fatal to the caller:
    /// this method never retries, because the operation carries no idempotence
    /// guarantee and a repeat after a partial failure is unsafe to assume safe.
    ///
    /// # Errors
    /// * [`BackendError::Confirmation`] if the token does not match.
    /// * [`BackendError::Http`] on transport failures.
    /// * [`BackendError::Service`] when the function answers a non-success status.
    #[instrument(skip_all)]
    pub async fn reset_all(&self, confirmation: &str) -> Result<(), BackendError> {
        if confirmation != RESET_CONFIRMATION {
            return Err(BackendError::Confirmation {
                message: "confirmation token does not match the required literal".into(),
                context: None,
            });
        }

        warn!("Invoking administrative reset: wiping all project data and accounts");

        let response = self
            .inner
            .http
            .post(self.endpoint(RESET_FUNCTION_PATH))
            .json(&ResetRequest { confirm: confirmation })
            .send()
            .await
            .context("Invoking reset function")?;

        let status = response.status();
        if status.is_success() {
            info!("Administrative reset acknowledged by the backend");
            return Ok(());
        }

        let detail = response.text().await.unwrap_or_default();
        Err(BackendError::Service {
            message: format!("Reset function answered {status}: {detail}").into(),
            context: None,
        })
    }
}

/// A fluent builder for configuring and establishing a backend connection.
///
/// The project URL and public API key are required upfront; [`init`] performs
/// the health handshake before handing out a usable client.
///
/// [`init`]: BackendBuilder::init
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct BackendBuilder {
    url: Option<String>,
    api_key: Option<String>,
}

impl BackendBuilder {
    /// Creates a new [`BackendBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the public (anon) API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Consumes the builder and establishes the connection.
    ///
    /// # Process
    /// 1. **Validation**: Ensures URL and API key are provided and non-empty.
    /// 2. **Client Construction**: Builds a `reqwest` client carrying the key as
    ///    both `apikey` and bearer `Authorization` default headers.
    /// 3. **Resilience**: Performs up to 3 health probes. If the first fails,
    ///    it retries with exponential backoff (starting at 500ms).
    ///
    /// # Errors
    /// * [`BackendError::Validation`] if required parameters are missing.
    /// * [`BackendError::Connection`] if the project stays unhealthy after retries.
    /// * [`BackendError::Internal`] if the HTTP client cannot be constructed.
    #[instrument(skip(self), fields(url = self.url))]
    pub async fn init(self) -> Result<Backend, BackendError> {
        let url = self.url.ok_or(BackendError::Validation {
            message: "URL is required".into(),
            context: None,
        })?;
        let api_key = self.api_key.ok_or(BackendError::Validation {
            message: "API key is required".into(),
            context: None,
        })?;
        if url.trim().is_empty() || api_key.trim().is_empty() {
            return Err(BackendError::Validation {
                message: "URL and API key must be non-empty".into(),
                context: None,
            });
        }

        let base_url = url.trim_end_matches('/').to_owned();

        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(&api_key).map_err(|e| BackendError::Validation {
            message: e.to_string().into(),
            context: Some("API key is not a valid header value".into()),
        })?;
        let bearer = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
            BackendError::Validation {
                message: e.to_string().into(),
                context: Some("API key is not a valid header value".into()),
            }
        })?;
        headers.insert(API_KEY_HEADER, key_value);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::Internal {
                message: e.to_string().into(),
                context: Some("Constructing HTTP client".into()),
            })?;

        let backend = Backend { inner: Arc::new(BackendInner { http, base_url }) };

        // Connectivity & health check with retries
        let mut delay = Duration::from_millis(500);
        for attempt in 1..=3 {
            match backend.health().await {
                Ok(()) => break,
                Err(_) if attempt < 3 => {
                    warn!(attempt, ?delay, "Backend not ready, retrying...");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                },
                Err(e) => {
                    return Err(BackendError::Connection {
                        message: "Unhealthy after retries".into(),
                        context: Some(e.to_string().into()),
                    });
                },
            }
        }

        info!(url = %backend.inner.base_url, "Backend connection established");
        Ok(backend)
    }
}
