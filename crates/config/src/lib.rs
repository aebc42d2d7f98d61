//! Configuration for the vvpctl CLI.
//!
//! Responsibilities:
//! - Define the typed configuration consumed by the client and CLI crates.
//! - Load configuration from a YAML file, `VVP_*` environment variables,
//!   and CLI-flag overrides, in ascending precedence order.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Constructing HTTP clients (see `vvp-client`).
//!
//! Invariants:
//! - The API token is held as a [`secrecy::SecretString`] and never appears
//!   in `Debug` output or logs.
//! - Precedence is always flag > environment > config file > built-in default.

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{default_config_path, ConfigLoader};
pub use types::{ApiConfig, Config, DefaultConfig, OutputFormat};

/// Environment variable prefix shared by all configuration overrides.
pub const ENV_PREFIX: &str = "VVP";

/// Fixed request timeout applied to every API call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
