//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `invoicer.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use invoicer_domain::fee::{self, FeeRule, FeeSchedule};
use invoicer_domain::id::RecordId;
use invoicer_domain::service_type::ServiceType;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Record identifier settings.
    pub ids: IdsConfig,
    /// Per-type fee rules. Each table must be complete.
    pub fees: FeesConfig,
    /// Demo batch settings.
    pub batch: BatchConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Identifier allocation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IdsConfig {
    /// First record id handed out.
    pub first_id: u64,
}

/// Fee schedule overrides, one table per service type.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FeesConfig {
    pub regular: FeeRule,
    pub after_hours: FeeRule,
    pub emergency: FeeRule,
    pub discount: FeeRule,
}

/// The batch invoiced on start-up: one record per service type.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Hours worked on every record of the batch.
    pub hours: u32,
}

impl Config {
    /// Load configuration from `invoicer.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("invoicer.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(first_id) = env_parse("INVOICER_FIRST_ID") {
            self.ids.first_id = first_id;
        }
        if let Some(hours) = env_parse("INVOICER_BATCH_HOURS") {
            self.batch.hours = hours;
        }
        if let Ok(val) = std::env::var("INVOICER_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ids.first_id == u64::MAX {
            return Err(ConfigError::Validation(
                "ids.first_id leaves no id to hand out".to_string(),
            ));
        }
        Ok(())
    }

    /// First id the allocator should hand out.
    #[must_use]
    pub fn first_id(&self) -> RecordId {
        RecordId::new(self.ids.first_id)
    }

    /// Build the fee schedule described by `[fees]`.
    #[must_use]
    pub fn fee_schedule(&self) -> FeeSchedule {
        self.fees
            .iter()
            .fold(FeeSchedule::empty(), |schedule, (service_type, rule)| {
                schedule.with_rule(service_type, rule)
            })
    }
}

/// Read and parse an environment variable, ignoring it when absent or malformed.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.parse().ok())
}

impl FeesConfig {
    fn iter(&self) -> impl Iterator<Item = (ServiceType, FeeRule)> {
        [
            (ServiceType::Regular, self.regular),
            (ServiceType::AfterHours, self.after_hours),
            (ServiceType::Emergency, self.emergency),
            (ServiceType::Discount, self.discount),
        ]
        .into_iter()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "invoicerd=info,invoicer_app=info".to_string(),
        }
    }
}

impl Default for FeesConfig {
    fn default() -> Self {
        Self {
            regular: fee::REGULAR,
            after_hours: fee::AFTER_HOURS,
            emergency: fee::EMERGENCY,
            discount: fee::DISCOUNT,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { hours: 8 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
