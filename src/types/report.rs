use serde::{Deserialize, Serialize};

use crate::ats::MatchTier;
use crate::scoring::KeywordComparison;

/// The final result of one resume-vs-job-description analysis.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Similarity in percent, two decimals.
    pub score: f64,
    /// Name of the similarity strategy that produced `score`.
    pub strategy: String,
    pub tier: MatchTier,

    pub keywords: KeywordComparison,

    pub formatting_warnings: Vec<String>,
    pub suggestions: Vec<String>,
}
