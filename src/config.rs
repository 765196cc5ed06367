use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::DEFAULT_MIN_STEM_LEN;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub version: String,
    pub min_stem_len: usize,
    /// Size of the job-description keyword pool handed to the comparator.
    pub top_n: usize,
    pub keywords: KeywordFilter,
    pub formatting: FormattingThresholds,
    pub tiers: TierThresholds,
    /// How many missing keywords a suggestion line names.
    pub suggestion_keyword_limit: usize,
}

/// Noise filtering applied to job-description tokens before ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordFilter {
    pub min_len: usize,
    pub drop_stopwords: bool,
    pub drop_numeric: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingThresholds {
    /// Consecutive spaces that suggest a column or table layout.
    pub space_run: usize,
    /// Fewer non-empty lines than this, or fewer words than `min_words`, is a
    /// short document. Either alone is enough: few lines usually means the
    /// extractor merged line breaks.
    pub min_lines: usize,
    pub min_words: usize,
}

/// Lower bounds (inclusive) of each qualitative tier, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl MatcherConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            min_stem_len: DEFAULT_MIN_STEM_LEN,
            top_n: 50,
            keywords: KeywordFilter::default(),
            formatting: FormattingThresholds::default(),
            tiers: TierThresholds::default(),
            suggestion_keyword_limit: 10,
        }
    }

    /// Parse a (possibly partial) JSON document. Missing fields take `v0` values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MatcherConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), version = %config.version, "loaded matcher config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_stem_len == 0 {
            return Err(ConfigError::Invalid("min_stem_len must be at least 1".into()));
        }
        if self.formatting.space_run < 2 {
            return Err(ConfigError::Invalid(format!(
                "formatting.space_run must be at least 2, got {}",
                self.formatting.space_run
            )));
        }

        let TierThresholds { excellent, good, fair } = self.tiers;
        for (name, value) in [("excellent", excellent), ("good", good), ("fair", fair)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "tiers.{name} must be within [0, 100], got {value}"
                )));
            }
        }
        if !(excellent > good && good > fair) {
            return Err(ConfigError::Invalid(format!(
                "tier thresholds must be strictly descending, got {excellent} / {good} / {fair}"
            )));
        }

        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self {
            min_len: 2,
            drop_stopwords: true,
            drop_numeric: true,
        }
    }
}

impl Default for FormattingThresholds {
    fn default() -> Self {
        Self {
            space_run: 3,
            min_lines: 5,
            min_words: 50,
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            excellent: 85.0,
            good: 65.0,
            fair: 40.0,
        }
    }
}
