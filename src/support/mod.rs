//! Shared support modules providing error types and telemetry initialization.

pub mod errors;
pub mod telemetry;
