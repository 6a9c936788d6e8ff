//! Data models for the bootstrap workflow.

pub mod bootstrap;

pub use bootstrap::{AttemptOutcome, AttemptRecord, BootstrapReport, EndpointResponse};
