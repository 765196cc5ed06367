//! Deterministic resume-to-job-description matching.
//!
//! `resume-match-core` tokenizes free text, scores a resume against a job
//! description with term-frequency cosine similarity, splits the job's most
//! frequent keywords into matched and missing, and runs a handful of
//! ATS-style formatting checks. All operations are pure and deterministic:
//! identical inputs always produce identical outputs, and empty or garbage
//! text yields a zero score and empty lists rather than an error.
//!
//! Document extraction (PDF, DOCX), persistence and any UI live outside
//! this crate; it only ever sees plain text.

pub mod ats;
pub mod cache;
pub mod config;
pub mod document;
pub mod scoring;
pub mod text;
pub mod types;

pub use ats::{check_formatting, suggest};
pub use config::{ConfigError, MatcherConfig};
pub use scoring::{compare_keywords, similarity_score, ResumeAnalyzer};
pub use text::tokenize;
