//! Shared library modules providing error types, path resolution, command building, and telemetry.

pub mod bun;
pub mod errors;
pub mod paths;
pub mod telemetry;
