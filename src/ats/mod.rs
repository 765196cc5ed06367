pub mod formatting;
pub mod suggestions;

pub use formatting::{check_formatting, FormattingChecker, NON_STANDARD_BULLETS};
pub use suggestions::{suggest, MatchTier, SuggestionGenerator};
