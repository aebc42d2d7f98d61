//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   error types.
//! - Map [`ClientError`] variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use vvp_client::ClientError;

/// Structured exit codes for vvpctl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - missing or rejected token.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, DNS, or bad URL.
    ConnectionError = 3,

    /// Resource not found.
    NotFound = 4,

    /// Validation error - bad flag combinations or rejected input.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with `std::process::exit`.
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Api { status: 401, .. } | ClientError::Api { status: 403, .. } => {
                ExitCode::AuthenticationFailed
            }
            ClientError::Api { status: 404, .. } | ClientError::UsageReportUnavailable => {
                ExitCode::NotFound
            }
            ClientError::Api { status: 400, .. }
            | ClientError::Validation(_)
            | ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::Http(_) | ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::Api { .. } => ExitCode::GeneralError,
        }
    }
}

/// Exit code for an error bubbled up through anyhow, inspecting the
/// underlying [`ClientError`] when there is one.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ClientError>() {
        Some(client_err) => ExitCode::from(client_err),
        None => ExitCode::GeneralError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_statuses_map_to_categories() {
        let unauthorized = ClientError::Api {
            status: 401,
            message: "no".to_string(),
        };
        assert_eq!(ExitCode::from(&unauthorized), ExitCode::AuthenticationFailed);

        let missing = ClientError::Api {
            status: 404,
            message: "gone".to_string(),
        };
        assert_eq!(ExitCode::from(&missing), ExitCode::NotFound);

        let server = ClientError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(ExitCode::from(&server), ExitCode::GeneralError);
    }

    #[test]
    fn validation_maps_to_validation_error() {
        let err = ClientError::Validation("bad".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn anyhow_wrapping_preserves_the_client_error() {
        let err = anyhow::Error::from(ClientError::Validation("bad".to_string()));
        assert_eq!(exit_code_for(&err), ExitCode::ValidationError);

        let plain = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&plain), ExitCode::GeneralError);
    }
}
