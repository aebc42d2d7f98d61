//! Table formatters, one module per resource.
//!
//! Tables are tab-free fixed-width columns in the style of the rest of
//! the CLI: a header row, one row per item, `-` for absent cells.

pub mod deployments;
pub mod jobs;
pub mod namespaces;
pub mod savepoints;
pub mod secret_values;
pub mod session_clusters;
pub mod status;
pub mod targets;
pub mod usage;
