//! Waitlist feature slice: the mailing-list subscription collaborator.
//!
//! Subscription is fire-and-forget by policy: a failing mailing-list call is
//! logged and reported as `joined: false`, never raised into the enclosing
//! flow.

mod error;
#[cfg(feature = "server")]
pub mod routes;

pub use crate::error::{WaitlistError, WaitlistErrorExt};
use maison_domain::config::ApiConfig;
use maison_kernel::domain::registry::InitializedSlice;
use maison_kernel::safe_nanoid;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct SubscribePayload<'a> {
    site: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// Outcome of a join attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinReceipt {
    /// Correlation id for support lookups.
    pub request_id: String,
    pub joined: bool,
}

/// Waitlist feature state.
#[maison_derive::maison_slice]
pub struct Waitlist {
    http: reqwest::Client,
    url: String,
    site_id: String,
}

impl Waitlist {
    /// Subscribes an address to the launch mailing list.
    ///
    /// Never fails from the caller's perspective: a non-success answer or a
    /// transport error yields `joined: false` and a warning in the logs.
    pub async fn join(&self, email: &str, display_name: Option<&str>) -> JoinReceipt {
        let request_id = safe_nanoid!();

        match self.send_subscription(email, display_name).await {
            Ok(()) => {
                info!(%request_id, "Waitlist subscription accepted");
                JoinReceipt { request_id, joined: true }
            },
            Err(e) => {
                warn!(%request_id, error = %e, "Waitlist subscription failed; flow continues");
                JoinReceipt { request_id, joined: false }
            },
        }
    }

    async fn send_subscription(
        &self,
        email: &str,
        name: Option<&str>,
    ) -> Result<(), WaitlistError> {
        let payload = SubscribePayload { site: &self.site_id, email, name };

        let response = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .context("Posting subscription")?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(WaitlistError::Service {
                message: format!("Subscription answered {status}").into(),
                context: None,
            })
        }
    }
}

/// Initialize the waitlist feature.
///
/// # Errors
///
/// Returns [`WaitlistError::Config`] for an empty endpoint or site id, and
/// [`WaitlistError::Internal`] if the HTTP client cannot be constructed.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, WaitlistError> {
    let list = &config.mailing_list;
    if list.url.trim().is_empty() || list.site_id.trim().is_empty() {
        return Err(WaitlistError::Config {
            message: "mailing list url and site id must be configured".into(),
            context: None,
        });
    }

    let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build().map_err(|e| {
        WaitlistError::Internal {
            message: e.to_string().into(),
            context: Some("Constructing HTTP client".into()),
        }
    })?;

    info!(site = %list.site_id, "Waitlist slice initialized");

    let inner = WaitlistInner { http, url: list.url.clone(), site_id: list.site_id.clone() };

    let slice = Waitlist::new(inner);

    Ok(InitializedSlice::new(slice))
}
