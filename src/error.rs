use crate::config::ConfigError;
use crate::report::{CatalogError, ReportError};
use crate::telemetry::TelemetryError;
use std::fmt;

/// Umbrella error for hosts that wire the engine end to end: load
/// configuration, install telemetry, load a label catalog, assemble reports.
#[derive(Debug)]
pub enum EngineError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Catalog(CatalogError),
    Report(ReportError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Config(err) => write!(f, "configuration error: {}", err),
            EngineError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            EngineError::Catalog(err) => write!(f, "catalog error: {}", err),
            EngineError::Report(err) => write!(f, "report error: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Config(err) => Some(err),
            EngineError::Telemetry(err) => Some(err),
            EngineError::Catalog(err) => Some(err),
            EngineError::Report(err) => Some(err),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for EngineError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<CatalogError> for EngineError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<ReportError> for EngineError {
    fn from(value: ReportError) -> Self {
        Self::Report(value)
    }
}
