use once_cell::sync::Lazy;
use regex::Regex;

/// Inflectional endings tried by the stemmer, longest first.
pub const SUFFIXES: [&str; 5] = ["ment", "ing", "es", "ed", "s"];

/// Shortest stem a suffix may leave behind. Keeps "as", "is", "aws" intact.
pub const DEFAULT_MIN_STEM_LEN: usize = 3;

static TOKEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9+#.\-]+").expect("token pattern is a valid regex"));

/// Turns raw text into normalized, lightly stemmed tokens.
///
/// Normalization rules:
/// - Lowercase
/// - Maximal runs of `a-z 0-9 + # - .`
/// - Trailing `.`/`-` and leading `-` trimmed; a single leading `.` is kept (`.net`)
/// - At most one suffix from [`SUFFIXES`] removed from purely alphabetic tokens
///
/// Order and duplicates are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_stem_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            min_stem_len: DEFAULT_MIN_STEM_LEN,
        }
    }
}

impl Tokenizer {
    pub fn new(min_stem_len: usize) -> Self {
        Self {
            min_stem_len: min_stem_len.max(1),
        }
    }

    pub fn min_stem_len(&self) -> usize {
        self.min_stem_len
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        TOKEN_RUN
            .find_iter(&lowered)
            .filter_map(|run| trim_edges(run.as_str()))
            .map(|token| self.stem(token).to_string())
            .collect()
    }

    /// Strip the first matching suffix, longest first.
    ///
    /// Only the first suffix the token ends with is considered. It is removed
    /// when the stem keeps `min_stem_len` characters and no further suffix
    /// would apply to it, so `stem(stem(t)) == stem(t)`. "processes" therefore
    /// stays whole rather than drifting to "process" and then "proces".
    pub fn stem<'a>(&self, token: &'a str) -> &'a str {
        if !token.bytes().all(|b| b.is_ascii_lowercase()) {
            return token;
        }

        let Some(suffix) = SUFFIXES.iter().find(|suffix| token.ends_with(*suffix)) else {
            return token;
        };

        match self.strip(token, suffix) {
            Some(stem) if self.is_stable(stem) => stem,
            _ => token,
        }
    }

    /// Whether `token` is one of this tokenizer's stems of a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        super::stopwords::is_stopword_for(self, token)
    }

    fn strip<'a>(&self, token: &'a str, suffix: &str) -> Option<&'a str> {
        token
            .strip_suffix(suffix)
            .filter(|stem| stem.len() >= self.min_stem_len)
    }

    fn is_stable(&self, stem: &str) -> bool {
        SUFFIXES.iter().all(|suffix| self.strip(stem, suffix).is_none())
    }
}

/// Tokenize with the default stemming threshold.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

fn trim_edges(run: &str) -> Option<&str> {
    let trimmed_end = run.trim_end_matches(['.', '-']);
    let body = trimmed_end.trim_start_matches(['.', '-']);
    if body.is_empty() {
        return None;
    }

    let lead = &trimmed_end[..trimmed_end.len() - body.len()];
    if lead == "." {
        Some(trimmed_end)
    } else {
        Some(body)
    }
}
