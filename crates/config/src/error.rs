//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file was found but is not valid YAML for the expected schema.
    #[error("failed to parse config file {path}: {source}")]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The API base URL was not supplied by any source.
    #[error(
        "API URL is required (set it via the --api-url flag, the VVP_API_URL \
         environment variable, or api.url in {path})"
    )]
    MissingApiUrl { path: String },
}
