//! Client builder for constructing [`VvpClient`] instances.
//!
//! Responsibilities:
//! - Fluent builder API for client configuration.
//! - Validating required configuration (`base_url`).
//! - Normalizing the base URL (removing trailing slashes).
//! - Configuring the underlying HTTP client (fixed timeout, TLS policy).
//!
//! # Invariants
//! - `base_url` is required and always normalized to no trailing slash.
//! - The request timeout is fixed at construction; no per-call overrides.
//! - `insecure` only affects HTTPS connections; HTTP URLs log a warning.

use std::time::Duration;

use secrecy::SecretString;

use crate::client::VvpClient;
use crate::error::{ClientError, Result};
use vvp_config::{Config, DEFAULT_TIMEOUT_SECS};

/// Builder for creating a new [`VvpClient`].
///
/// All options have defaults except `base_url`.
pub struct VvpClientBuilder {
    base_url: Option<String>,
    token: Option<SecretString>,
    insecure: bool,
    timeout: Duration,
}

impl Default for VvpClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            insecure: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl VvpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the platform API, e.g. `https://vvp.example.com`.
    ///
    /// Trailing slashes are removed automatically.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the bearer token. `None` (the default) leaves requests
    /// unauthenticated.
    pub fn token(mut self, token: Option<SecretString>) -> Self {
        self.token = token;
        self
    }

    /// Skip TLS certificate verification.
    ///
    /// Only use against development installations with self-signed
    /// certificates.
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Pre-populate the builder from a resolved [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.api.url.clone());
        self.token = config.api.token.clone();
        self.insecure = config.api.insecure;
        self
    }

    /// Normalize a base URL by removing trailing slashes, preventing
    /// double slashes when concatenating endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`VvpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided,
    /// or [`ClientError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<VvpClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let mut http_builder = reqwest::Client::builder().timeout(self.timeout);

        if self.insecure {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // insecure only disables TLS verification; plain HTTP has no TLS layer.
                tracing::warn!("insecure=true has no effect on http:// URLs");
            }
        }

        let http = http_builder.build()?;

        Ok(VvpClient {
            http,
            base_url,
            token: self.token,
        })
    }
}
