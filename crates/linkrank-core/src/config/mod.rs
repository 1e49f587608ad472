//! Configuration management

use crate::error::{LinkRankError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Estimator parameters for a ranking run.
///
/// Values come from, in increasing precedence: built-in defaults, the config
/// file, `LINKRANK_*` environment variables, CLI flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping to a random page
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Number of random-surfer steps for the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Per-page convergence threshold for the iterative estimator
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Safety cap on iterative sweeps
    #[serde(default = "default_max_sweeps")]
    pub max_sweeps: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            max_sweeps: default_max_sweeps(),
        }
    }
}

fn default_damping() -> f64 {
    0.85
}

fn default_samples() -> usize {
    10_000
}

fn default_tolerance() -> f64 {
    0.001
}

fn default_max_sweeps() -> usize {
    100_000
}

impl RankConfig {
    /// Load config from the default path, then apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    fn apply_env(&mut self) {
        if let Some(damping) = env_parse("LINKRANK_DAMPING") {
            self.damping = damping;
        }
        if let Some(samples) = env_parse("LINKRANK_SAMPLES") {
            self.samples = samples;
        }
    }

    /// Check parameters before a run
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(LinkRankError::InvalidInput(format!(
                "damping factor must be in (0, 1], got {}",
                self.damping
            )));
        }
        if self.samples == 0 {
            return Err(LinkRankError::InvalidInput(
                "sample count must be at least 1".to_string(),
            ));
        }
        if self.max_sweeps == 0 {
            return Err(LinkRankError::InvalidInput(
                "sweep cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(var: &str) -> Option<T> {
    std::env::var(var).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RankConfig::default();
        assert_eq!(config.damping, 0.85);
        assert_eq!(config.samples, 10_000);
        assert_eq!(config.tolerance, 0.001);
    }

    #[test]
    fn test_validate_rejects_bad_damping() {
        let config = RankConfig {
            damping: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RankConfig {
            damping: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_full_damping() {
        let config = RankConfig {
            damping: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_samples() {
        let config = RankConfig {
            samples: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
