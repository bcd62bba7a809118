//! Engine configuration (TOML)
//!
//! Every section is optional; an empty file yields the defaults
//! (development logging, sequential lookups, no seed). Unknown keys are
//! rejected so that typos do not silently fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use petshop_core::errors::{PsError, PsErrorKind, Result};
use petshop_core::logging_facility::Profile;
use petshop_core::LookupStrategy;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PetshopConfig {
    pub logging: LoggingConfig,
    pub service: ServiceConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub profile: Profile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub lookup: LookupStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Seed file to load into the in-memory stores at startup
    pub path: Option<PathBuf>,
}

/// Create a configuration error
pub fn config_error(reason: &str) -> PsError {
    PsError::new(PsErrorKind::InvalidConfig)
        .with_op("config_load")
        .with_message(reason.to_string())
}

impl PetshopConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the text is not valid TOML or has unknown keys or values
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| config_error(&format!("TOML parse error: {}", e)))
    }

    /// Load a configuration file
    ///
    /// A relative seed path is resolved against the directory holding the
    /// configuration file.
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be read
    /// - `InvalidConfig` if its content is rejected
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PsError::new(PsErrorKind::Io)
                .with_op("config_load")
                .with_entity_id(path.display().to_string())
                .with_message(e.to_string())
        })?;

        let mut config = Self::from_toml_str(&content)
            .map_err(|e| e.with_entity_id(path.display().to_string()))?;

        if let (Some(seed), Some(dir)) = (&config.seed.path, path.parent()) {
            if seed.is_relative() {
                config.seed.path = Some(dir.join(seed));
            }
        }

        tracing::debug!(
            path = %path.display(),
            profile = ?config.logging.profile,
            lookup = ?config.service.lookup,
            "Configuration loaded"
        );

        Ok(config)
    }
}
