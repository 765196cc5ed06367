use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::MatcherConfig;

/// Content hash of a single text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextFingerprint(String);

impl TextFingerprint {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        TextFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity of one analysis: config, strategy and both texts.
///
/// Texts are length-prefixed so ("ab", "c") and ("a", "bc") never collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisKey(String);

impl AnalysisKey {
    pub fn new(
        config: &MatcherConfig,
        strategy: &str,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<Self, serde_json::Error> {
        let mut hasher = Sha256::new();

        let config_json = serde_json::to_vec(config)?;
        hasher.update((config_json.len() as u64).to_le_bytes());
        hasher.update(&config_json);

        for part in [strategy, resume_text, jd_text] {
            hasher.update((part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }

        Ok(AnalysisKey(format!("sha256:{}", hex::encode(hasher.finalize()))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
