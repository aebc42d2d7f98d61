//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind global connection flags to their `VVP_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve configuration precedence (see `vvp-config`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vvpctl")]
#[command(about = "Manage Ververica Platform resources from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  vvpctl deployment list -n default\n  vvpctl deployment create -f deployment.yaml\n  vvpctl deployment delete orders --force\n  vvpctl savepoint create --deployment-id d-1\n  vvpctl status\n  vvpctl usage report --from 2024-05-01 --to 2024-05-31 -o json\n"
)]
pub struct Cli {
    /// Base URL of the platform API (e.g., https://vvp.example.com)
    #[arg(long, global = true, env = "VVP_API_URL")]
    pub api_url: Option<String>,

    /// API token for bearer authentication
    #[arg(long, global = true, env = "VVP_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Namespace to operate in (defaults to config if not set)
    #[arg(short = 'n', long, global = true, env = "VVP_DEFAULT_NAMESPACE")]
    pub namespace: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short = 'o', long, global = true, env = "VVP_OUTPUT_FORMAT")]
    pub output: Option<String>,

    /// Path to a custom configuration file (default: ~/.vvpctl/config.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage deployments
    Deployment {
        #[command(subcommand)]
        command: DeploymentCommand,
    },

    /// Manage namespaces
    Namespace {
        #[command(subcommand)]
        command: NamespaceCommand,
    },

    /// Manage deployment targets
    #[command(name = "deployment-target")]
    DeploymentTarget {
        #[command(subcommand)]
        command: DeploymentTargetCommand,
    },

    /// Manage session clusters
    #[command(name = "sessioncluster")]
    SessionCluster {
        #[command(subcommand)]
        command: SessionClusterCommand,
    },

    /// Inspect jobs
    Job {
        #[command(subcommand)]
        command: JobCommand,
    },

    /// Manage savepoints
    Savepoint {
        #[command(subcommand)]
        command: SavepointCommand,
    },

    /// Manage secret values
    #[command(name = "secret-value")]
    SecretValue {
        #[command(subcommand)]
        command: SecretValueCommand,
    },

    /// Manage namespace deployment defaults
    #[command(name = "deployment-defaults")]
    DeploymentDefaults {
        #[command(subcommand)]
        command: DeploymentDefaultsCommand,
    },

    /// Show platform health, version, and component status
    Status,

    /// Resource usage operations
    Usage {
        #[command(subcommand)]
        command: UsageCommand,
    },
}

#[derive(Subcommand)]
pub enum DeploymentCommand {
    /// List all deployments
    List,
    /// Get a deployment by name
    Get { name: String },
    /// Create a new deployment from a YAML/JSON file
    Create {
        /// Path to deployment YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Update an existing deployment from a YAML/JSON file
    Update {
        name: String,
        /// Path to deployment YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a deployment
    Delete {
        name: String,
        /// Cancel the deployment first if it is not already cancelled
        #[arg(long)]
        force: bool,
    },
    /// Start a deployment (desired state RUNNING)
    Start { name: String },
    /// Stop a deployment (desired state CANCELLED)
    Stop { name: String },
    /// Suspend a deployment (desired state SUSPENDED)
    Suspend { name: String },
}

#[derive(Subcommand)]
pub enum NamespaceCommand {
    /// List all namespaces
    List,
    /// Get a namespace by name
    Get { name: String },
    /// Create a new namespace from a YAML/JSON file
    Create {
        /// Path to namespace YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Update an existing namespace from a YAML/JSON file
    Update {
        name: String,
        /// Path to namespace YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a namespace
    Delete { name: String },
}

#[derive(Subcommand)]
pub enum DeploymentTargetCommand {
    /// List deployment targets in a namespace
    List,
    /// Get a deployment target by name
    Get { name: String },
    /// Create a new deployment target from a YAML/JSON file
    Create {
        /// Path to deployment target YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Update an existing deployment target from a YAML/JSON file
    Update {
        name: String,
        /// Path to deployment target YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a deployment target
    Delete { name: String },
}

#[derive(Subcommand)]
pub enum SessionClusterCommand {
    /// List session clusters in a namespace
    List,
    /// Get a session cluster by name
    Get { name: String },
    /// Create a session cluster from a YAML/JSON file
    Create {
        /// Path to session cluster YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Patch a session cluster from a YAML/JSON file
    Update {
        name: String,
        /// Path to session cluster YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Create or replace a session cluster by name
    Upsert {
        name: String,
        /// Path to session cluster YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a session cluster
    Delete { name: String },
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// List jobs in a namespace
    List,
    /// Get a job by ID
    Get { job_id: String },
}

#[derive(Subcommand)]
pub enum SavepointCommand {
    /// List savepoints in a namespace
    List,
    /// Get a savepoint by ID
    Get { savepoint_id: String },
    /// Create a savepoint for a deployment or a job
    Create {
        /// Deployment ID to savepoint (mutually exclusive with --job-id)
        #[arg(long)]
        deployment_id: Option<String>,
        /// Job ID to savepoint (mutually exclusive with --deployment-id)
        #[arg(long)]
        job_id: Option<String>,
        /// Human-readable name for the savepoint
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a savepoint record
    Delete { savepoint_id: String },
}

#[derive(Subcommand)]
pub enum SecretValueCommand {
    /// List secret values in a namespace
    List,
    /// Get a secret value by name
    Get { name: String },
    /// Create a secret value from a YAML/JSON file
    Create {
        /// Path to secret value YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Replace a secret value from a YAML/JSON file
    Update {
        name: String,
        /// Path to secret value YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a secret value
    Delete { name: String },
}

#[derive(Subcommand)]
pub enum DeploymentDefaultsCommand {
    /// Get deployment defaults for a namespace
    Get,
    /// Replace deployment defaults from a YAML/JSON file
    Replace {
        /// Path to deployment defaults YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Patch deployment defaults with a SecretValue YAML/JSON file
    Update {
        /// Path to SecretValue YAML/JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum UsageCommand {
    /// Get the platform-wide resource usage report
    Report {
        /// Start date (YYYY-MM-DD, inclusive; defaults to 7 days ago)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD, exclusive; defaults to today)
        #[arg(long)]
        to: Option<String>,
    },
}
