//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the resolved [`Config`] handed to command handlers and the
//!   client builder.
//! - Define the [`OutputFormat`] selector shared by all commands.
//!
//! Does NOT handle:
//! - Loading or merging configuration sources (see `loader`).

use std::fmt;

use secrecy::SecretString;

/// Output format for rendered resources.
///
/// Unrecognized format names fall back to `Table` rather than failing;
/// the CLI treats the format as a presentation hint, not a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name, falling back to `Table` for anything unknown.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "yaml" => Self::Yaml,
            _ => Self::Table,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// API connection settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the platform API, e.g. `https://vvp.example.com`.
    pub url: String,
    /// Bearer token; `None` means unauthenticated.
    pub token: Option<SecretString>,
    /// Skip TLS certificate verification.
    pub insecure: bool,
}

/// Default values applied when a command does not specify them.
#[derive(Debug, Clone, Default)]
pub struct DefaultConfig {
    /// Namespace used when `--namespace` is not given.
    pub namespace: Option<String>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub default: DefaultConfig,
    pub output: OutputFormat,
}

impl Config {
    /// Default namespace, if one is configured.
    pub fn default_namespace(&self) -> Option<&str> {
        self.default.namespace.as_deref()
    }
}
