use crate::profile::LaunchProfile;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub launch: LaunchProfile,
    pub backend: BackendConfig,
    pub payments: PaymentsConfig,
    pub mailing_list: MailingListConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Managed backend project connection (data, auth, remote functions).
///
/// The public API key is safe to embed in clients; it is not a root secret.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub url: String,
    pub api_key: String,
}

/// Payment collaborator configuration.
///
/// The collaborator is optional: when no publishable key is deployed, the
/// payment handle is simply absent and call sites treat that as a valid,
/// checked state.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaymentsConfig {
    pub publishable_key: Option<String>,
}

/// Mailing-list collaborator configuration for the waitlist.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailingListConfig {
    pub url: String,
    pub site_id: String,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4127, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { url: "http://localhost:54321".to_owned(), api_key: "dev-anon-key".to_owned() }
    }
}

impl Default for MailingListConfig {
    fn default() -> Self {
        Self { url: "http://localhost:8765/subscribe".to_owned(), site_id: "dev-site".to_owned() }
    }
}
