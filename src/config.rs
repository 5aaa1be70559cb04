use crate::eval::DEFAULT_CUTOFF;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file looked up in the current directory.
const DEFAULT_CONFIG_FILE: &str = "mrr.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub eval: EvalConfig,
}

/// Evaluation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EvalConfig {
    /// Maximum number of top positions searched for a relevant item.
    #[serde(default = "default_cutoff")]
    pub cutoff: usize,
    /// Scan whole rankings, ignoring `cutoff`.
    #[serde(default)]
    pub unbounded: bool,
    /// Optional pass threshold for the evaluation CLI.
    #[serde(default)]
    pub min_mrr: Option<f64>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
            unbounded: false,
            min_mrr: None,
            log_level: default_log_level(),
        }
    }
}

fn default_cutoff() -> usize {
    DEFAULT_CUTOFF
}

fn default_log_level() -> String {
    "info".to_string()
}

fn check_min_mrr(min_mrr: f64, name: &str) -> Result<()> {
    if !(0.0..=1.0).contains(&min_mrr) {
        anyhow::bail!("{} must be between 0.0 and 1.0, got {}", name, min_mrr);
    }
    Ok(())
}

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) first.
    /// Looks for the config file in this order:
    /// 1. Path specified in MRR_CONFIG environment variable (must exist)
    /// 2. ./mrr.toml in current directory (defaults are used if absent)
    pub fn load() -> Result<Self> {
        // .env is optional
        let _ = dotenv::dotenv();

        match std::env::var("MRR_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and validate a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&config_str)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate TOML config text
    pub fn parse(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.eval.cutoff == 0 {
            anyhow::bail!("eval.cutoff must be greater than 0 (set eval.unbounded = true to scan whole rankings)");
        }

        if let Some(min_mrr) = self.eval.min_mrr {
            check_min_mrr(min_mrr, "eval.min_mrr")?;
        }

        Ok(())
    }

    /// Effective MRR threshold: `override_min_mrr` (e.g. from the command line)
    /// wins over `eval.min_mrr`. Either must lie in [0, 1].
    pub fn min_mrr(&self, override_min_mrr: Option<f64>) -> Result<Option<f64>> {
        match override_min_mrr {
            Some(min_mrr) => {
                check_min_mrr(min_mrr, "min_mrr")?;
                Ok(Some(min_mrr))
            }
            None => Ok(self.eval.min_mrr),
        }
    }

    /// Effective cutoff (None = unbounded)
    pub fn cutoff(&self) -> Option<usize> {
        if self.eval.unbounded {
            None
        } else {
            Some(self.eval.cutoff)
        }
    }
}
