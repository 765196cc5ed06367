use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::formatting::FormattingChecker;
use crate::config::TierThresholds;

// Group 1 is the number. It must not follow a letter or digit, so the 3 in
// "S3" or "Python3" is not a metric.
static QUANTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^\w$])(\$?\d+(?:[.,]\d+)*\+?%?)").expect("quantity pattern is a valid regex")
});

const MAX_ECHOED_QUANTITIES: usize = 5;

/// Qualitative band of a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchTier {
    pub fn from_score(score: f64, tiers: &TierThresholds) -> Self {
        if score >= tiers.excellent {
            MatchTier::Excellent
        } else if score >= tiers.good {
            MatchTier::Good
        } else if score >= tiers.fair {
            MatchTier::Fair
        } else {
            MatchTier::Low
        }
    }

    pub fn headline(&self, score: f64) -> String {
        match self {
            MatchTier::Excellent => format!(
                "Excellent match ({score:.2}%). Your resume is closely aligned with this job description; polish the wording and apply."
            ),
            MatchTier::Good => format!(
                "Good match ({score:.2}%). Work in a few of the missing keywords where they genuinely apply."
            ),
            MatchTier::Fair => format!(
                "Fair match ({score:.2}%). Tailor your summary and skills sections to mirror this job description."
            ),
            MatchTier::Low => format!(
                "Low match ({score:.2}%). Rework your resume around this job's core requirements before applying."
            ),
        }
    }
}

/// Deterministic advice assembled from a score, keyword gaps and the resume text.
#[derive(Debug, Clone)]
pub struct SuggestionGenerator {
    tiers: TierThresholds,
    keyword_limit: usize,
    formatting: FormattingChecker,
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self {
            tiers: TierThresholds::default(),
            keyword_limit: 10,
            formatting: FormattingChecker::default(),
        }
    }
}

impl SuggestionGenerator {
    pub fn new(tiers: TierThresholds, keyword_limit: usize, formatting: FormattingChecker) -> Self {
        Self {
            tiers,
            keyword_limit,
            formatting,
        }
    }

    pub fn tier(&self, score: f64) -> MatchTier {
        MatchTier::from_score(score, &self.tiers)
    }

    pub fn suggest(
        &self,
        score: f64,
        matched: &[String],
        missing: &[String],
        resume_text: &str,
    ) -> Vec<String> {
        let warnings = self.formatting.check(resume_text);
        self.suggest_with_warnings(score, matched, missing, resume_text, &warnings)
    }

    /// Same as [`suggest`](Self::suggest) with formatting warnings computed by the caller.
    pub fn suggest_with_warnings(
        &self,
        score: f64,
        matched: &[String],
        missing: &[String],
        resume_text: &str,
        warnings: &[String],
    ) -> Vec<String> {
        let mut suggestions = vec![self.tier(score).headline(score)];

        if !matched.is_empty() {
            suggestions.push(format!(
                "Your resume already covers {} of the top {} job keywords.",
                matched.len(),
                matched.len() + missing.len()
            ));
        }

        if !missing.is_empty() && self.keyword_limit > 0 {
            let top: Vec<&str> = missing
                .iter()
                .take(self.keyword_limit)
                .map(String::as_str)
                .collect();
            suggestions.push(format!(
                "Consider adding these missing keywords where they apply: {}",
                top.join(", ")
            ));
        }

        let quantities = find_quantities(resume_text);
        if quantities.is_empty() {
            suggestions.push(
                "Quantify your achievements with numbers or percentages, for example: reduced build time by 30%."
                    .to_string(),
            );
        } else {
            suggestions.push(format!(
                "Quantified results found: {}. Keep them prominent.",
                quantities.join(", ")
            ));
        }

        suggestions.extend(warnings.iter().map(|w| format!("Formatting: {w}")));
        suggestions
    }
}

/// Distinct numeric or percentage values in source order, at most five.
fn find_quantities(text: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    for m in QUANTITY.captures_iter(text).filter_map(|caps| caps.get(1)) {
        if found.len() == MAX_ECHOED_QUANTITIES {
            break;
        }
        if !found.contains(&m.as_str()) {
            found.push(m.as_str());
        }
    }
    found
}

/// Suggest with the default tiers, keyword limit and formatting thresholds.
pub fn suggest(score: f64, matched: &[String], missing: &[String], resume_text: &str) -> Vec<String> {
    SuggestionGenerator::default().suggest(score, matched, missing, resume_text)
}
