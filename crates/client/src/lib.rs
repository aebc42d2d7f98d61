//! Typed REST client for the Ververica Platform API.
//!
//! Responsibilities:
//! - Provide [`VvpClient`] with one method per resource operation
//!   (deployments, namespaces, session clusters, jobs, savepoints,
//!   secret values, deployment defaults, platform status, usage reports).
//! - Define the resource models with JSON/YAML serialization.
//!
//! Does NOT handle:
//! - Output formatting or CLI argument parsing (see `crates/cli`).
//! - Configuration resolution (see `crates/config`).
//!
//! Invariants:
//! - Every operation issues exactly one HTTP call; nothing is retried.
//! - Non-2xx responses surface as [`ClientError::Api`] carrying the status
//!   code and the raw response body.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::builder::VvpClientBuilder;
pub use client::VvpClient;
pub use error::{ClientError, Result};
