//! Platform API client and per-resource API methods.
//!
//! # Submodules
//! - [`builder`]: client construction and configuration
//! - `deployments`, `deployment_defaults`, `deployment_targets`, `jobs`,
//!   `namespaces`, `savepoints`, `secret_values`, `session_clusters`,
//!   `status`: one `impl VvpClient` block per resource
//!
//! # What this module does NOT handle:
//! - HTTP plumbing (see [`crate::endpoints`])
//! - Output formatting (see the CLI crate)
//!
//! # Invariants
//! - The bearer token, base URL, timeout, and TLS policy are fixed at
//!   construction time and apply to every call.

pub mod builder;

mod deployment_defaults;
mod deployment_targets;
mod deployments;
mod jobs;
mod namespaces;
mod savepoints;
mod secret_values;
mod session_clusters;
mod status;

use secrecy::{ExposeSecret, SecretString};

/// Ververica Platform REST API client.
///
/// Construct with [`VvpClient::builder()`]:
///
/// ```rust,ignore
/// let client = VvpClient::builder()
///     .base_url("https://vvp.example.com".to_string())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct VvpClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: Option<SecretString>,
}

impl VvpClient {
    /// Create a new client builder.
    pub fn builder() -> builder::VvpClientBuilder {
        builder::VvpClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn bearer_token(&self) -> Option<&str> {
        self.token.as_ref().map(ExposeSecret::expose_secret)
    }
}
