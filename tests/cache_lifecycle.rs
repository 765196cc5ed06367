use chrono::Utc;
use resume_match_core::cache::{InMemoryScoreCache, ScoreCache};
use resume_match_core::config::MatcherConfig;
use resume_match_core::scoring::{ResumeAnalyzer, TermFrequencyCosine, TfIdfCosine};
use resume_match_core::types::AnalysisKey;

const RESUME: &str = "Java developer with SQL experience";
const JD: &str = "Senior Java Developer needed with SQL and Hibernate skills";

#[test]
fn cached_and_uncached_analysis_agree() {
    let analyzer = ResumeAnalyzer::default();
    let cache = InMemoryScoreCache::new(8);

    let uncached = analyzer.analyze(RESUME, JD);
    let first = analyzer.analyze_cached(&cache, RESUME, JD);
    let second = analyzer.analyze_cached(&cache, RESUME, JD);

    assert_eq!(first, uncached);
    assert_eq!(second, uncached);
    assert_eq!(cache.len(), 1);
}

#[test]
fn cache_hit_returns_stored_report() {
    let analyzer = ResumeAnalyzer::default();
    let cache = InMemoryScoreCache::new(8);

    let key = analyzer.cache_key(RESUME, JD).unwrap();
    let mut planted = analyzer.analyze("rust", "rust");
    planted.suggestions = vec!["planted".to_string()];
    cache.insert(key.clone(), planted.clone());

    let served = analyzer.analyze_cached(&cache, RESUME, JD);
    assert_eq!(served, planted);
    assert!(cache.entry(&key).is_some());
}

#[test]
fn keys_separate_texts_strategies_and_configs() {
    let config = MatcherConfig::v0();

    let base = AnalysisKey::new(&config, "term_frequency_cosine", "ab", "c").unwrap();
    let shifted = AnalysisKey::new(&config, "term_frequency_cosine", "a", "bc").unwrap();
    let swapped = AnalysisKey::new(&config, "term_frequency_cosine", "c", "ab").unwrap();
    let other_strategy = AnalysisKey::new(&config, "tf_idf_cosine", "ab", "c").unwrap();

    let other_config = MatcherConfig {
        top_n: 400,
        ..MatcherConfig::v0()
    };
    let reconfigured = AnalysisKey::new(&other_config, "term_frequency_cosine", "ab", "c").unwrap();

    for other in [&shifted, &swapped, &other_strategy, &reconfigured] {
        assert_ne!(&base, other);
    }

    let again = AnalysisKey::new(&MatcherConfig::v0(), "term_frequency_cosine", "ab", "c").unwrap();
    assert_eq!(base, again);
    assert!(base.as_str().starts_with("sha256:"));
    assert_eq!(base.as_str().len(), "sha256:".len() + 64);
}

#[test]
fn analyzers_with_different_strategies_do_not_share_entries() {
    let cache = InMemoryScoreCache::new(8);
    let tf = ResumeAnalyzer::default();
    let tf_idf = ResumeAnalyzer::new(TfIdfCosine, MatcherConfig::v0()).unwrap();

    let a = tf.analyze_cached(&cache, RESUME, JD);
    let b = tf_idf.analyze_cached(&cache, RESUME, JD);

    assert_eq!(a.strategy, "term_frequency_cosine");
    assert_eq!(b.strategy, "tf_idf_cosine");
    assert_eq!(cache.len(), 2);
}

#[test]
fn evicts_oldest_entry_at_capacity() {
    let analyzer = ResumeAnalyzer::new(TermFrequencyCosine, MatcherConfig::v0()).unwrap();
    let cache = InMemoryScoreCache::new(2);

    let jds = ["rust", "go", "python"];
    for jd in jds {
        analyzer.analyze_cached(&cache, RESUME, jd);
    }

    assert_eq!(cache.len(), 2);
    assert!(!cache.contains(&analyzer.cache_key(RESUME, "rust").unwrap()));
    assert!(cache.contains(&analyzer.cache_key(RESUME, "go").unwrap()));
    assert!(cache.contains(&analyzer.cache_key(RESUME, "python").unwrap()));
}

#[test]
fn entries_record_when_they_were_stored() {
    let analyzer = ResumeAnalyzer::default();
    let cache = InMemoryScoreCache::new(2);
    let key = analyzer.cache_key(RESUME, JD).unwrap();

    let before = Utc::now();
    analyzer.analyze_cached(&cache, RESUME, JD);
    let after = Utc::now();

    let first = cache.entry(&key).unwrap();
    assert!(before <= first.stored_at && first.stored_at <= after);
    assert_eq!(first.report, analyzer.analyze(RESUME, JD));

    // Replacing an entry restamps it
    cache.insert(key.clone(), first.report.clone());
    let replaced = cache.entry(&key).unwrap();
    assert!(replaced.stored_at >= first.stored_at);
    assert!(replaced.stored_at >= after);

    let json = serde_json::to_value(&replaced).unwrap();
    assert!(json["stored_at"].is_string());
}

#[test]
fn reinserting_a_key_does_not_evict() {
    let analyzer = ResumeAnalyzer::default();
    let cache = InMemoryScoreCache::new(2);

    let key = analyzer.cache_key(RESUME, JD).unwrap();
    let report = analyzer.analyze(RESUME, JD);
    cache.insert(key.clone(), report.clone());
    cache.insert(key.clone(), report);

    assert_eq!(cache.len(), 1);
}

#[test]
fn zero_capacity_stores_nothing() {
    let analyzer = ResumeAnalyzer::default();
    let cache = InMemoryScoreCache::new(0);

    let report = analyzer.analyze_cached(&cache, RESUME, JD);
    assert_eq!(report, analyzer.analyze(RESUME, JD));
    assert!(cache.is_empty());
}

#[test]
fn clear_empties_the_cache() {
    let analyzer = ResumeAnalyzer::default();
    let cache = InMemoryScoreCache::new(4);
    analyzer.analyze_cached(&cache, RESUME, JD);

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.capacity(), 4);
}

#[test]
fn cache_can_be_used_as_trait_object() {
    let analyzer = ResumeAnalyzer::default();
    let cache: Box<dyn ScoreCache> = Box::new(InMemoryScoreCache::new(4));

    let first = analyzer.analyze_cached(cache.as_ref(), RESUME, JD);
    let second = analyzer.analyze_cached(cache.as_ref(), RESUME, JD);
    assert_eq!(first, second);
}
