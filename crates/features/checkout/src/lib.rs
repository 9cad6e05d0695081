//! Checkout feature slice: the optional payment collaborator.
//!
//! The payment element runs in the browser and only needs the publishable
//! key and a session descriptor from this side. The collaborator handle is
//! `None` when no key is deployed; every call site treats absence as a valid,
//! checked state rather than assuming presence.

mod error;
#[cfg(feature = "server")]
pub mod routes;

pub use crate::error::{CheckoutError, CheckoutErrorExt};
use maison_domain::config::ApiConfig;
use maison_kernel::domain::registry::InitializedSlice;
use maison_kernel::safe_nanoid;
use tracing::info;

/// Handle to the payment element provider.
#[derive(Debug, Clone)]
pub struct PaymentProvider {
    publishable_key: String,
}

impl PaymentProvider {
    /// The key the front end mounts the payment element with.
    #[must_use]
    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }

    /// Prepares a checkout session descriptor for the front end.
    #[must_use]
    pub fn create_session(&self) -> CheckoutSession {
        CheckoutSession {
            session_id: safe_nanoid!(21),
            publishable_key: self.publishable_key.clone(),
        }
    }
}

/// A prepared checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub session_id: String,
    pub publishable_key: String,
}

/// Checkout feature state.
#[maison_derive::maison_slice]
pub struct Checkout {
    pub provider: Option<PaymentProvider>,
}

/// Initialize the checkout feature.
///
/// # Errors
///
/// Returns [`CheckoutError::Config`] when a publishable key is present but blank.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, CheckoutError> {
    let provider = match &config.payments.publishable_key {
        Some(key) if key.trim().is_empty() => {
            return Err(CheckoutError::Config {
                message: "publishable key is configured but blank".into(),
                context: None,
            });
        },
        Some(key) => Some(PaymentProvider { publishable_key: key.clone() }),
        None => None,
    };

    info!(configured = provider.is_some(), "Checkout slice initialized");

    let inner = CheckoutInner { provider };

    let slice = Checkout::new(inner);

    Ok(InitializedSlice::new(slice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maison_domain::config::ApiConfig;

    fn config_with_key(key: Option<&str>) -> ApiConfig {
        let mut config = ApiConfig::default();
        config.payments.publishable_key = key.map(str::to_owned);
        config
    }

    #[test]
    fn absent_key_yields_an_unconfigured_provider() {
        let slice = init(&config_with_key(None)).expect("init should succeed");
        let checkout =
            slice.state.as_any().downcast_ref::<Checkout>().expect("state should be Checkout");
        assert!(checkout.provider.is_none());
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(init(&config_with_key(Some("  "))).is_err());
    }

    #[test]
    fn sessions_carry_the_publishable_key_and_fresh_ids() {
        let slice = init(&config_with_key(Some("pk_test_abc"))).expect("init should succeed");
        let checkout =
            slice.state.as_any().downcast_ref::<Checkout>().expect("state should be Checkout");
        let provider = checkout.provider.as_ref().expect("provider should be configured");

        let first = provider.create_session();
        let second = provider.create_session();
        assert_eq!(first.publishable_key, "pk_test_abc");
        assert_eq!(first.session_id.len(), 21);
        assert_ne!(first.session_id, second.session_id);
    }
}
