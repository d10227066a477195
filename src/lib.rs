//! Result normalization and aggregation engine for multi-step orientation
//! assessments.
//!
//! Assessment steps write their result bundles in whatever schema generation
//! was current at the time, so the stored corpus holds several shapes of the
//! same data. This crate resolves semantic fields across those generations,
//! ranks scored categories, blends multi-stage taxonomies into composite
//! indices, and assembles the canonical report handed to presentation. The
//! pipeline is synchronous and free of I/O: hosts fetch bundles and render
//! reports, the engine only normalizes and aggregates.

pub mod config;
pub mod error;
pub mod report;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, TelemetryConfig};
pub use error::EngineError;
pub use report::{CanonicalReport, RawStepBundle, ReportAssembler, ReportError};
