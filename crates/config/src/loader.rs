//! Configuration loader.
//!
//! Responsibilities:
//! - Merge the config file, `VVP_*` environment variables, and CLI-flag
//!   overrides into a resolved [`Config`].
//! - Locate the default config file at `~/.vvpctl/config.yaml`.
//!
//! Does NOT handle:
//! - CLI flag parsing (the CLI hands parsed values in via `with_*`).
//!
//! Invariants:
//! - A missing config file at the *default* path is not an error; a file
//!   passed explicitly via `with_file` must exist and parse.
//! - Precedence per field is flag > environment > file > default.

use std::env;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{ApiConfig, Config, DefaultConfig, OutputFormat};
use crate::ENV_PREFIX;

/// Default config file location, `~/.vvpctl/config.yaml`.
///
/// Returns `None` when no home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".vvpctl").join("config.yaml"))
}

/// On-disk schema: `{api:{url,token,insecure}, default:{namespace}, output:{format}}`.
///
/// Every field is optional so a partial file merges cleanly with the
/// other sources.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api: FileApi,
    default: FileDefault,
    output: FileOutput,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileApi {
    url: Option<String>,
    token: Option<String>,
    insecure: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileDefault {
    namespace: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileOutput {
    format: Option<String>,
}

/// Environment overlay captured from `VVP_*` variables.
#[derive(Debug, Default)]
struct EnvConfig {
    api_url: Option<String>,
    api_token: Option<String>,
    insecure: Option<bool>,
    namespace: Option<String>,
    output: Option<String>,
}

impl EnvConfig {
    fn capture() -> Self {
        Self {
            api_url: env_var("API_URL"),
            api_token: env_var("API_TOKEN"),
            insecure: env_var("API_INSECURE").map(|v| parse_bool(&v)),
            namespace: env_var("DEFAULT_NAMESPACE"),
            output: env_var("OUTPUT_FORMAT"),
        }
    }
}

fn env_var(suffix: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{suffix}"))
        .ok()
        .filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// Builder that merges configuration sources into a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    api_url: Option<String>,
    api_token: Option<String>,
    insecure: Option<bool>,
    namespace: Option<String>,
    output: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit config file instead of the default location.
    ///
    /// Unlike the default file, an explicit file must exist and parse.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// CLI-flag override for the API base URL.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        self.api_url = url.filter(|v| !v.trim().is_empty());
        self
    }

    /// CLI-flag override for the API token.
    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token.filter(|v| !v.trim().is_empty());
        self
    }

    /// CLI-flag override for skipping TLS verification.
    ///
    /// `None` leaves the environment/file value in effect; clap only
    /// passes `Some(true)` when the flag is present.
    pub fn with_insecure(mut self, insecure: Option<bool>) -> Self {
        self.insecure = insecure;
        self
    }

    /// CLI-flag override for the default namespace.
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace.filter(|v| !v.trim().is_empty());
        self
    }

    /// CLI-flag override for the output format.
    pub fn with_output(mut self, output: Option<String>) -> Self {
        self.output = output.filter(|v| !v.trim().is_empty());
        self
    }

    /// Resolve the final configuration.
    pub fn load(self) -> Result<Config, ConfigError> {
        let explicit = self.file.is_some();
        let file_path = self.file.clone().or_else(default_config_path);
        let file = match &file_path {
            Some(path) => read_file_layer(path, explicit)?,
            None => FileConfig::default(),
        };
        let env = EnvConfig::capture();

        let path_hint = file_path
            .as_deref()
            .map(Path::to_string_lossy)
            .map(|p| p.into_owned())
            .unwrap_or_else(|| "~/.vvpctl/config.yaml".to_string());

        let url = self
            .api_url
            .or(env.api_url)
            .or(file.api.url)
            .ok_or(ConfigError::MissingApiUrl { path: path_hint })?;

        let token = self
            .api_token
            .or(env.api_token)
            .or(file.api.token)
            .filter(|t| !t.is_empty())
            .map(SecretString::from);

        let insecure = self
            .insecure
            .or(env.insecure)
            .or(file.api.insecure)
            .unwrap_or(false);

        let namespace = self
            .namespace
            .or(env.namespace)
            .or(file.default.namespace)
            .filter(|ns| !ns.is_empty());

        let output = self
            .output
            .or(env.output)
            .or(file.output.format)
            .map(|f| OutputFormat::parse(&f))
            .unwrap_or_default();

        Ok(Config {
            api: ApiConfig {
                url,
                token,
                insecure,
            },
            default: DefaultConfig { namespace },
            output,
        })
    }
}

/// Read and parse one config file layer.
///
/// For the default path a missing file falls through to an empty layer;
/// read and parse failures on an explicit file are fatal.
fn read_file_layer(path: &Path, explicit: bool) -> Result<FileConfig, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(FileConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::FileRead {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    let parsed = serde_yaml::from_str(&contents).map_err(|err| ConfigError::FileParse {
        path: path.to_path_buf(),
        source: err,
    })?;
    tracing::info!(path = %path.display(), "using config file");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    const ENV_VARS: [&str; 5] = [
        "VVP_API_URL",
        "VVP_API_TOKEN",
        "VVP_API_INSECURE",
        "VVP_DEFAULT_NAMESPACE",
        "VVP_OUTPUT_FORMAT",
    ];

    fn with_clean_env<F: FnOnce()>(f: F) {
        let unset: Vec<(&str, Option<&str>)> = ENV_VARS.iter().map(|v| (*v, None)).collect();
        temp_env::with_vars(unset, f);
    }

    #[test]
    #[serial]
    fn loads_all_fields_from_file() {
        with_clean_env(|| {
            let file = write_config(
                "api:\n  url: https://vvp.example.com\n  token: file-token\n  insecure: true\ndefault:\n  namespace: default\noutput:\n  format: yaml\n",
            );
            let config = ConfigLoader::new().with_file(file.path()).load().unwrap();
            assert_eq!(config.api.url, "https://vvp.example.com");
            assert_eq!(config.api.token.unwrap().expose_secret(), "file-token");
            assert!(config.api.insecure);
            assert_eq!(config.default.namespace.as_deref(), Some("default"));
            assert_eq!(config.output, OutputFormat::Yaml);
        });
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        let file = write_config("api:\n  url: https://from-file\ndefault:\n  namespace: file-ns\n");
        temp_env::with_vars(
            [
                ("VVP_API_URL", Some("https://from-env")),
                ("VVP_DEFAULT_NAMESPACE", Some("env-ns")),
            ],
            || {
                let config = ConfigLoader::new().with_file(file.path()).load().unwrap();
                assert_eq!(config.api.url, "https://from-env");
                assert_eq!(config.default.namespace.as_deref(), Some("env-ns"));
            },
        );
    }

    #[test]
    #[serial]
    fn flag_overrides_env_and_file() {
        let file = write_config("api:\n  url: https://from-file\n");
        temp_env::with_vars([("VVP_API_URL", Some("https://from-env"))], || {
            let config = ConfigLoader::new()
                .with_file(file.path())
                .with_api_url(Some("https://from-flag".to_string()))
                .load()
                .unwrap();
            assert_eq!(config.api.url, "https://from-flag");
        });
    }

    #[test]
    #[serial]
    fn missing_url_is_a_descriptive_error() {
        with_clean_env(|| {
            let file = write_config("default:\n  namespace: sandbox\n");
            let err = ConfigLoader::new().with_file(file.path()).load().unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("--api-url"));
            assert!(msg.contains("VVP_API_URL"));
        });
    }

    #[test]
    #[serial]
    fn explicit_file_must_parse() {
        with_clean_env(|| {
            let file = write_config("api: [not, a, mapping]\n");
            let err = ConfigLoader::new().with_file(file.path()).load().unwrap_err();
            assert!(matches!(err, ConfigError::FileParse { .. }));
        });
    }

    #[test]
    #[serial]
    fn explicit_file_must_exist() {
        with_clean_env(|| {
            let err = ConfigLoader::new()
                .with_file("/nonexistent/vvpctl/config.yaml")
                .with_api_url(Some("https://vvp.example.com".to_string()))
                .load()
                .unwrap_err();
            assert!(matches!(err, ConfigError::FileRead { .. }));
        });
    }

    #[test]
    #[serial]
    fn invalid_output_format_falls_back_to_table() {
        with_clean_env(|| {
            let file = write_config("api:\n  url: https://vvp.example.com\noutput:\n  format: csv\n");
            let config = ConfigLoader::new().with_file(file.path()).load().unwrap();
            assert_eq!(config.output, OutputFormat::Table);
        });
    }

    #[test]
    #[serial]
    fn insecure_env_parses_truthy_values() {
        let file = write_config("api:\n  url: https://vvp.example.com\n");
        temp_env::with_vars([("VVP_API_INSECURE", Some("true"))], || {
            let config = ConfigLoader::new().with_file(file.path()).load().unwrap();
            assert!(config.api.insecure);
        });
    }

    #[test]
    #[serial]
    fn empty_token_means_unauthenticated() {
        with_clean_env(|| {
            let file = write_config("api:\n  url: https://vvp.example.com\n  token: \"\"\n");
            let config = ConfigLoader::new().with_file(file.path()).load().unwrap();
            assert!(config.api.token.is_none());
        });
    }
}
