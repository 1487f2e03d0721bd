// src/common/config.rs
//! Runtime configuration for the tracker binary.
//! Values come from the environment (optionally a `.env` file) and can be
//! overridden by command line flags.

use std::env;
use std::fmt;
use tracing::{info, warn};

/// Which validation strategies a service is built with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Basic, serial number and business rule strategies
    Default,
    /// Only the serial number strategy
    SerialOnly,
    /// No validation context at all
    Disabled,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Default => "default",
            ValidationMode::SerialOnly => "serial",
            ValidationMode::Disabled => "none",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "default" | "all" | "strict" => Some(ValidationMode::Default),
            "serial" | "serial-only" => Some(ValidationMode::SerialOnly),
            "none" | "off" | "disabled" => Some(ValidationMode::Disabled),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub seed_sample_data: bool,
    pub validation: ValidationMode,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            validation: ValidationMode::Default,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // TRACKER_SEED_DATA - set to "false" to start with an empty inventory
        if let Some(seed) = lookup("TRACKER_SEED_DATA") {
            config.seed_sample_data = seed.trim().to_lowercase() != "false";
        }

        // TRACKER_VALIDATION - default | serial | none
        if let Some(mode) = lookup("TRACKER_VALIDATION") {
            match ValidationMode::parse(&mode) {
                Some(parsed) => config.validation = parsed,
                None => warn!(
                    value = %mode,
                    fallback = %config.validation,
                    "Unrecognized TRACKER_VALIDATION value"
                ),
            }
        }

        config
    }

    /// Override configuration from CLI flags. Later flags win.
    pub fn apply_cli_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "--seed" => self.seed_sample_data = true,
                "--no-seed" => self.seed_sample_data = false,
                "--strict" => self.validation = ValidationMode::Default,
                "--serial-only" => self.validation = ValidationMode::SerialOnly,
                "--no-validation" => self.validation = ValidationMode::Disabled,
                _ => {}
            }
        }

        self
    }

    pub fn log_status(&self) {
        info!(
            seed_sample_data = self.seed_sample_data,
            validation = %self.validation,
            "Tracker configuration loaded"
        );
        if self.validation == ValidationMode::Disabled {
            warn!("Validation disabled, all equipment records will be accepted as-is");
        }
    }
}
