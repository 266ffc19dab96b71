//! # Pathfinder Common
//!
//! Shared building blocks for the pathfinder workspace.
//!
//! * **[`report`]**: The normalized scan report model (report, hosts, ports).
//! * **[`config`]**: Run configuration handed from the CLI to the parsers.

pub mod config;
pub mod report;
