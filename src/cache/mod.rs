pub mod cache;

pub use cache::{CachedReport, InMemoryScoreCache, ScoreCache};
