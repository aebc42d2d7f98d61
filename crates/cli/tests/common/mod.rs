//! Shared test utilities for vvpctl integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//!
//! Invariants / Assumptions:
//! - `HOME` points at the cargo test tmpdir, so the user's real
//!   `~/.vvpctl/config.yaml` is never read.
//! - All `VVP_*` variables are cleared; tests opt in explicitly.

use assert_cmd::Command;

/// Returns a hermetic `vvpctl` command for integration testing.
pub fn vvpctl_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vvpctl");

    // Hermeticity: the default config path resolves under HOME.
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"));

    cmd.env_remove("VVP_API_URL")
        .env_remove("VVP_API_TOKEN")
        .env_remove("VVP_API_INSECURE")
        .env_remove("VVP_DEFAULT_NAMESPACE")
        .env_remove("VVP_OUTPUT_FORMAT");

    cmd
}

/// Returns a hermetic `vvpctl` command pointed at the given API base URL.
#[allow(dead_code)]
pub fn vvpctl_cmd_with_url(base_url: &str) -> Command {
    let mut cmd = vvpctl_cmd();
    cmd.env("VVP_API_URL", base_url);
    cmd
}
