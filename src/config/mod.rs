use crate::report::{AssemblyConfig, AssessmentStep, ScopePrecedence, StageWeightTable};
use std::env;
use std::fmt;

/// Top-level configuration for a host embedding the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub assembly: AssemblyConfig,
    pub weighting: StageWeightTable,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = AssemblyConfig::default();

        let scope_precedence = if legacy_flag("REPORT_LEGACY_ROOT_PRECEDENCE")? {
            ScopePrecedence::RootFirst
        } else {
            ScopePrecedence::StepFirst
        };

        let assembly = AssemblyConfig {
            scope_precedence,
            interest_leaders: leader_count("REPORT_INTEREST_LEADERS", defaults.interest_leaders)?,
            personality_leaders: leader_count(
                "REPORT_PERSONALITY_LEADERS",
                defaults.personality_leaders,
            )?,
            academic_leaders: leader_count("REPORT_ACADEMIC_LEADERS", defaults.academic_leaders)?,
            sector_leaders: leader_count("REPORT_SECTOR_LEADERS", defaults.sector_leaders)?,
            language_leaders: leader_count("REPORT_LANGUAGE_LEADERS", defaults.language_leaders)?,
        };

        let weighting = StageWeightTable::new(vec![
            (
                AssessmentStep::InterestProfile,
                stage_weight("REPORT_INTEREST_STAGE_WEIGHT")?,
            ),
            (
                AssessmentStep::CareerCompatibility,
                stage_weight("REPORT_CAREER_STAGE_WEIGHT")?,
            ),
        ]);

        let log_level = env::var("REPORT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            assembly,
            weighting,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn legacy_flag(key: &'static str) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidFlag { key }),
        },
        Err(_) => Ok(false),
    }
}

fn leader_count(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|source| ConfigError::InvalidCount { key, source }),
        Err(_) => Ok(default),
    }
}

fn stage_weight(key: &'static str) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let weight = value
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidWeight { key })?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight { key });
            }
            Ok(weight)
        }
        Err(_) => Ok(1.0),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFlag { key: &'static str },
    InvalidCount {
        key: &'static str,
        source: std::num::ParseIntError,
    },
    InvalidWeight { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFlag { key } => {
                write!(f, "{key} must be a boolean flag (true/false/1/0)")
            }
            ConfigError::InvalidCount { key, .. } => {
                write!(f, "{key} must be a whole number of entries")
            }
            ConfigError::InvalidWeight { key } => {
                write!(f, "{key} must be a finite non-negative number")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidCount { source, .. } => Some(source),
            ConfigError::InvalidFlag { .. } | ConfigError::InvalidWeight { .. } => None,
        }
    }
}
