pub mod stopwords;
pub mod tokenizer;

pub use stopwords::{is_stopword, is_stopword_for};
pub use tokenizer::{tokenize, Tokenizer, DEFAULT_MIN_STEM_LEN, SUFFIXES};
