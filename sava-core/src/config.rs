use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::{Result, SavaError};
use crate::target::{TargetInstant, TargetZone, DELIVERY_MILESTONE};

/// Longest accepted refresh interval (one year)
pub const MAX_REFRESH_SECS: u64 = 366 * 24 * 60 * 60;

/// Settings for the reservation countdown, read from ~/.sava/config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavaConfig {
    pub countdown: CountdownSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSection {
    /// Wall-clock literal, `YYYY-MM-DDTHH:MM:SS`
    pub target: String,
    /// "local", "utc", or an IANA zone name
    pub timezone: String,
    pub refresh_secs: u64,
}

impl Default for CountdownSection {
    fn default() -> Self {
        Self {
            target: DELIVERY_MILESTONE.to_string(),
            timezone: "local".to_string(),
            refresh_secs: 60 * 60,
        }
    }
}

/// Copy shown around the countdown counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub headline: String,
    pub tagline: String,
    pub ship_note: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            headline: "RESERVE YOUR ROBOT".to_string(),
            tagline: "LIMITED AVAILABILITY FOR 2025".to_string(),
            ship_note: "The first SAVA press brake operator ships:".to_string(),
        }
    }
}

impl SavaConfig {
    /// Load ~/.sava/config.toml, then apply SAVA_* environment overrides.
    ///
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            debug!("No config at {}, using defaults", config_path.display());
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Get config file path: ~/.sava/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sava/config.toml")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|err| SavaError::toml_parse(path, err))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply SAVA_TARGET, SAVA_TZ and SAVA_REFRESH_SECS from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(target) = lookup("SAVA_TARGET") {
            self.countdown.target = target;
        }
        if let Some(timezone) = lookup("SAVA_TZ") {
            self.countdown.timezone = timezone;
        }
        if let Some(refresh) = lookup("SAVA_REFRESH_SECS") {
            self.countdown.refresh_secs = refresh.trim().parse().map_err(|_| {
                SavaError::config(format!("SAVA_REFRESH_SECS must be whole seconds, got '{refresh}'"))
            })?;
        }
        Ok(())
    }

    /// Save config, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn target_zone(&self) -> Result<TargetZone> {
        self.countdown.timezone.parse()
    }

    /// Validated countdown target
    pub fn target_instant(&self) -> Result<TargetInstant> {
        TargetInstant::parse(&self.countdown.target, self.target_zone()?)
    }

    pub fn refresh_period(&self) -> Result<Duration> {
        if self.countdown.refresh_secs == 0 {
            return Err(SavaError::invalid_interval("refresh_secs must be at least 1"));
        }
        if self.countdown.refresh_secs > MAX_REFRESH_SECS {
            return Err(SavaError::invalid_interval(format!(
                "refresh_secs must be at most {MAX_REFRESH_SECS}"
            )));
        }
        Ok(Duration::from_secs(self.countdown.refresh_secs))
    }
}
