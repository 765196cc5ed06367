use std::collections::HashMap;

use crate::text::Tokenizer;

/// Document-level similarity between a resume and a job description.
///
/// Implementations only decide how tokens are weighted; vocabulary
/// construction, normalization and the percentage scale are shared.
pub trait SimilarityStrategy {
    /// Stable identifier, reported alongside scores and hashed into cache keys.
    fn name(&self) -> &'static str;

    /// Weight vectors for both documents over one shared vocabulary.
    /// `tokenizer` is the one that produced the tokens.
    fn weigh(&self, tokenizer: &Tokenizer, resume: &[String], jd: &[String]) -> (Vec<f64>, Vec<f64>);

    /// Cosine similarity in [0, 1] of two token sequences.
    fn cosine(&self, tokenizer: &Tokenizer, resume: &[String], jd: &[String]) -> f64 {
        if resume.is_empty() || jd.is_empty() {
            return 0.0;
        }
        let (resume_weights, jd_weights) = self.weigh(tokenizer, resume, jd);
        cosine_similarity(&resume_weights, &jd_weights)
    }

    /// Percentage in [0, 100], rounded to two decimals.
    fn score(&self, tokenizer: &Tokenizer, resume_text: &str, jd_text: &str) -> f64 {
        if resume_text.trim().is_empty() || jd_text.trim().is_empty() {
            return 0.0;
        }

        let resume = tokenizer.tokenize(resume_text);
        let jd = tokenizer.tokenize(jd_text);
        let score = to_percentage(self.cosine(tokenizer, &resume, &jd));
        debug_assert!((0.0..=100.0).contains(&score), "score {score} out of range [0, 100]");
        score
    }
}

/// Raw term counts, unweighted.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermFrequencyCosine;

impl SimilarityStrategy for TermFrequencyCosine {
    fn name(&self) -> &'static str {
        "term_frequency_cosine"
    }

    fn weigh(&self, _tokenizer: &Tokenizer, resume: &[String], jd: &[String]) -> (Vec<f64>, Vec<f64>) {
        let vocabulary = Vocabulary::build([resume, jd]);
        (
            vocabulary.term_frequencies(resume),
            vocabulary.term_frequencies(jd),
        )
    }
}

/// Term counts scaled by a smoothed inverse document frequency over the
/// two-document corpus, stopwords removed.
///
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1` with `n = 2`, so shared terms
/// weigh 1.0 and terms unique to one side weigh `1 + ln(1.5)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdfCosine;

impl TfIdfCosine {
    const CORPUS_SIZE: f64 = 2.0;

    fn content_terms(tokenizer: &Tokenizer, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !tokenizer.is_stopword(token))
            .cloned()
            .collect()
    }
}

impl SimilarityStrategy for TfIdfCosine {
    fn name(&self) -> &'static str {
        "tf_idf_cosine"
    }

    fn weigh(&self, tokenizer: &Tokenizer, resume: &[String], jd: &[String]) -> (Vec<f64>, Vec<f64>) {
        let resume = Self::content_terms(tokenizer, resume);
        let jd = Self::content_terms(tokenizer, jd);

        let vocabulary = Vocabulary::build([resume.as_slice(), jd.as_slice()]);
        let mut resume_weights = vocabulary.term_frequencies(&resume);
        let mut jd_weights = vocabulary.term_frequencies(&jd);

        for (r, j) in resume_weights.iter_mut().zip(jd_weights.iter_mut()) {
            let df = (*r > 0.0) as u8 + (*j > 0.0) as u8;
            let idf = ((1.0 + Self::CORPUS_SIZE) / (1.0 + f64::from(df))).ln() + 1.0;
            *r *= idf;
            *j *= idf;
        }

        (resume_weights, jd_weights)
    }
}

/// Union vocabulary with indices assigned in first-seen order.
#[derive(Debug, Default)]
pub struct Vocabulary<'a> {
    index: HashMap<&'a str, usize>,
}

impl<'a> Vocabulary<'a> {
    pub fn build<const N: usize>(sequences: [&'a [String]; N]) -> Self {
        let mut index = HashMap::new();
        for token in sequences.into_iter().flatten() {
            let next = index.len();
            index.entry(token.as_str()).or_insert(next);
        }
        Self { index }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Count vector of `tokens`; tokens outside the vocabulary are ignored.
    pub fn term_frequencies(&self, tokens: &[String]) -> Vec<f64> {
        let mut counts = vec![0.0; self.index.len()];
        for token in tokens {
            if let Some(&i) = self.index.get(token.as_str()) {
                counts[i] += 1.0;
            }
        }
        counts
    }
}

/// Divide by the Euclidean norm. A zero vector stays zero.
pub fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

/// Dot product of the unit-normalized vectors, clamped to [0, 1].
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must share a vocabulary");

    let mut a = a.to_vec();
    let mut b = b.to_vec();
    l2_normalize(&mut a);
    l2_normalize(&mut b);

    let dot: f64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
    dot.clamp(0.0, 1.0)
}

/// `cosine * 100`, rounded to two decimals.
pub fn to_percentage(cosine: f64) -> f64 {
    (cosine.clamp(0.0, 1.0) * 100.0 * 100.0).round() / 100.0
}

/// Term-frequency cosine similarity of two raw texts, in percent.
pub fn similarity_score(resume_text: &str, jd_text: &str) -> f64 {
    TermFrequencyCosine.score(&Tokenizer::default(), resume_text, jd_text)
}
