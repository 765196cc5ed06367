pub mod identifiers;
pub mod report;

pub use identifiers::{AnalysisKey, TextFingerprint};
pub use report::AnalysisReport;
