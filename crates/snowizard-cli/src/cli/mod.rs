//! Configuration and logging setup for the `snowizard` binary.
//!
//! - [`config`] - CLI/env arguments and their validated form.
//! - [`telemetry`] - `tracing` subscriber writing to stderr.

pub mod config;
pub mod telemetry;
