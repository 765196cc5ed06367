use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::KeywordFilter;
use crate::text::Tokenizer;

/// Job-description keywords split by presence in the resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordComparison {
    /// Selected JD keywords found in the resume, most frequent first.
    pub matched: Vec<String>,
    /// Selected JD keywords absent from the resume, most frequent first.
    pub missing: Vec<String>,
    /// Count of every JD keyword that survived filtering.
    pub jd_frequency: BTreeMap<String, usize>,
}

impl KeywordComparison {
    /// Number of JD keywords that took part in the partition.
    pub fn selected(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Share of selected keywords present in the resume, in [0, 1].
    pub fn coverage(&self) -> f64 {
        match self.selected() {
            0 => 0.0,
            n => self.matched.len() as f64 / n as f64,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeywordComparator {
    tokenizer: Tokenizer,
    filter: KeywordFilter,
}

impl KeywordComparator {
    pub fn new(tokenizer: Tokenizer, filter: KeywordFilter) -> Self {
        Self { tokenizer, filter }
    }

    pub fn compare(&self, resume_text: &str, jd_text: &str, top_n: usize) -> KeywordComparison {
        let ranked = self.rank_jd_keywords(jd_text);
        if ranked.is_empty() {
            return KeywordComparison::default();
        }

        let resume_terms: HashSet<String> = self.tokenizer.tokenize(resume_text).into_iter().collect();

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for (term, _) in ranked.iter().take(top_n) {
            if resume_terms.contains(term) {
                matched.push(term.clone());
            } else {
                missing.push(term.clone());
            }
        }

        KeywordComparison {
            matched,
            missing,
            jd_frequency: ranked.into_iter().collect(),
        }
    }

    /// JD keywords with their counts, by descending count then first appearance.
    pub fn rank_jd_keywords(&self, jd_text: &str) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for token in self.tokenizer.tokenize(jd_text) {
            if !self.is_keyword(&token) {
                continue;
            }
            match positions.get(&token).copied() {
                Some(i) => ranked[i].1 += 1,
                None => {
                    positions.insert(token.clone(), ranked.len());
                    ranked.push((token, 1));
                }
            }
        }

        // Stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    fn is_keyword(&self, token: &str) -> bool {
        if token.chars().count() < self.filter.min_len {
            return false;
        }
        if self.filter.drop_numeric && token.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        !(self.filter.drop_stopwords && self.tokenizer.is_stopword(token))
    }
}

/// Compare with the default tokenizer and keyword filter.
pub fn compare_keywords(resume_text: &str, jd_text: &str, top_n: usize) -> KeywordComparison {
    KeywordComparator::default().compare(resume_text, jd_text, top_n)
}
