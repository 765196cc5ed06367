pub mod keywords;
pub mod similarity;

use crate::ats::{FormattingChecker, SuggestionGenerator};
use crate::cache::ScoreCache;
use crate::config::{ConfigError, MatcherConfig};
use crate::document::DocumentText;
use crate::text::Tokenizer;
use crate::types::{AnalysisKey, AnalysisReport};
pub use keywords::{compare_keywords, KeywordComparator, KeywordComparison};
pub use similarity::{
	cosine_similarity, l2_normalize, similarity_score, to_percentage, SimilarityStrategy,
	TermFrequencyCosine, TfIdfCosine, Vocabulary,
};

/// Runs the whole pipeline for one resume / job description pair.
///
/// Holds only immutable configuration, so one analyzer can serve any number
/// of concurrent callers.
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer<S> {
	strategy: S,
	config: MatcherConfig,
	tokenizer: Tokenizer,
	keywords: KeywordComparator,
	formatting: FormattingChecker,
	suggestions: SuggestionGenerator,
}

impl Default for ResumeAnalyzer<TermFrequencyCosine> {
	fn default() -> Self {
		Self::from_validated(TermFrequencyCosine, MatcherConfig::v0())
	}
}

impl<S> ResumeAnalyzer<S>
where
	S: SimilarityStrategy,
{
	pub fn new(strategy: S, config: MatcherConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self::from_validated(strategy, config))
	}

	fn from_validated(strategy: S, config: MatcherConfig) -> Self {
		let tokenizer = Tokenizer::new(config.min_stem_len);
		let formatting = FormattingChecker::new(config.formatting.clone());
		Self {
			keywords: KeywordComparator::new(tokenizer, config.keywords.clone()),
			suggestions: SuggestionGenerator::new(
				config.tiers.clone(),
				config.suggestion_keyword_limit,
				formatting.clone(),
			),
			formatting,
			tokenizer,
			strategy,
			config,
		}
	}

	pub fn config(&self) -> &MatcherConfig {
		&self.config
	}

	pub fn strategy(&self) -> &S {
		&self.strategy
	}

	pub fn analyze(&self, resume_text: &str, jd_text: &str) -> AnalysisReport {
		// 1. Similarity Phase
		let score = self.strategy.score(&self.tokenizer, resume_text, jd_text);

		// 2. Keyword Phase
		let keywords = self.keywords.compare(resume_text, jd_text, self.config.top_n);

		debug_assert!(
			keywords.missing.windows(2).all(|w| {
				keywords.jd_frequency.get(&w[0]) >= keywords.jd_frequency.get(&w[1])
			}),
			"missing keywords must be ordered by descending JD frequency"
		);

		// 3. Heuristics Phase
		let formatting_warnings = self.formatting.check(resume_text);
		let tier = self.suggestions.tier(score);
		let suggestions = self.suggestions.suggest_with_warnings(
			score,
			&keywords.matched,
			&keywords.missing,
			resume_text,
			&formatting_warnings,
		);

		tracing::debug!(
			strategy = self.strategy.name(),
			score,
			matched = keywords.matched.len(),
			missing = keywords.missing.len(),
			warnings = formatting_warnings.len(),
			"analysis complete"
		);

		AnalysisReport {
			score,
			strategy: self.strategy.name().to_string(),
			tier,
			keywords,
			formatting_warnings,
			suggestions,
		}
	}

	pub fn analyze_documents(&self, resume: &DocumentText, jd: &DocumentText) -> AnalysisReport {
		self.analyze(resume.as_str(), jd.as_str())
	}

	pub fn cache_key(&self, resume_text: &str, jd_text: &str) -> Result<AnalysisKey, serde_json::Error> {
		AnalysisKey::new(&self.config, self.strategy.name(), resume_text, jd_text)
	}

	/// Serve from `cache` when possible, otherwise analyze and store the result.
	pub fn analyze_cached<C>(&self, cache: &C, resume_text: &str, jd_text: &str) -> AnalysisReport
	where
		C: ScoreCache + ?Sized,
	{
		let key = match self.cache_key(resume_text, jd_text) {
			Ok(key) => key,
			Err(err) => {
				tracing::warn!(error = %err, "could not derive cache key, analyzing uncached");
				return self.analyze(resume_text, jd_text);
			}
		};

		if let Some(report) = cache.get(&key) {
			tracing::trace!(key = key.as_str(), "analysis cache hit");
			return report;
		}

		tracing::trace!(key = key.as_str(), "analysis cache miss");
		let report = self.analyze(resume_text, jd_text);
		cache.insert(key, report.clone());
		report
	}
}
