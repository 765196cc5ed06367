use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::tokenizer::Tokenizer;

// Function words only.
const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "may",
    "me", "more", "most", "must", "my", "no", "nor", "not", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "out", "over", "own", "per", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "us", "very", "via", "was",
    "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "within", "would", "you", "your", "yours",
];

// One set per stemming threshold, holding each raw word and its stem under
// that threshold ("this" -> "thi", "was" -> "wa" at 2), since lookups happen on
// tokenizer output. Past the longest word nothing strips, so larger thresholds
// share the last set.
static STOPWORDS: Lazy<Vec<HashSet<&'static str>>> = Lazy::new(|| {
    let longest = ENGLISH.iter().map(|word| word.len()).max().unwrap_or(0);
    (1..=longest + 1)
        .map(|min_stem_len| {
            let tokenizer = Tokenizer::new(min_stem_len);
            ENGLISH
                .iter()
                .copied()
                .flat_map(|word| [word, tokenizer.stem(word)])
                .collect()
        })
        .collect()
});

/// Whether `token`, as produced by `tokenizer`, is a function word.
pub fn is_stopword_for(tokenizer: &Tokenizer, token: &str) -> bool {
    let sets = &*STOPWORDS;
    let slot = tokenizer.min_stem_len().clamp(1, sets.len()) - 1;
    sets[slot].contains(token)
}

/// Stopword lookup for tokens from the default [`Tokenizer`].
pub fn is_stopword(token: &str) -> bool {
    is_stopword_for(&Tokenizer::default(), token)
}
