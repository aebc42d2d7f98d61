//! HTTP request helpers shared by every resource operation.
//!
//! Responsibilities:
//! - Issue exactly one HTTP call per invocation, with the bearer token
//!   attached when one is configured.
//! - Classify failures: transport errors wrap the reqwest cause, non-2xx
//!   responses become [`ClientError::Api`] with the raw body.
//! - Percent-encode user-supplied path segments.
//!
//! Does NOT handle:
//! - Path templates (each resource module owns its own).
//! - Retries, backoff, or per-call timeouts (the client timeout is fixed).

pub mod url_encoding;

pub use url_encoding::encode_path_segment;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::client::VvpClient;
use crate::error::{ClientError, Result};

impl VvpClient {
    fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url(), path);
        let mut builder = self.http().request(method, url);
        if let Some(token) = self.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// `GET` a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let response = self.request(reqwest::Method::GET, path).send().await?;
        decode_json(response).await
    }

    /// `GET` a plain-text resource with optional query parameters.
    pub(crate) async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        debug!(path, "GET (text)");
        let response = self
            .request(reqwest::Method::GET, path)
            .query(query)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }

    /// `POST` a JSON body, decoding a JSON response.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        decode_json(response).await
    }

    /// `PUT` a JSON body (full replace), decoding a JSON response.
    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "PUT");
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        decode_json(response).await
    }

    /// `PATCH` a JSON body (partial update), decoding a JSON response.
    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "PATCH");
        let response = self
            .request(reqwest::Method::PATCH, path)
            .json(body)
            .send()
            .await?;
        decode_json(response).await
    }

    /// `DELETE` a resource, discarding any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        debug!(path, "DELETE");
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`ClientError::Api`] with the raw body.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "could not read error response body".to_string());
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    Ok(response.json().await?)
}
