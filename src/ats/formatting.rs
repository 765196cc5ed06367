use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::FormattingThresholds;

static IMAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<img\b|image:|!\[").expect("image marker pattern is a valid regex"));

/// Bullet glyphs that plain-text ATS extraction tends to mangle.
/// U+F0B7 is the private-use bullet Word emits for Symbol-font lists.
pub const NON_STANDARD_BULLETS: &[char] = &[
    '●', '■', '◆', '❖', '➢', '➤', '►', '▶', '▪', '♦', '✓', '✔', '★', '\u{f0b7}',
];

/// Pattern checks over raw, untokenized resume text.
#[derive(Debug, Clone, Default)]
pub struct FormattingChecker {
    thresholds: FormattingThresholds,
}

impl FormattingChecker {
    pub fn new(thresholds: FormattingThresholds) -> Self {
        Self { thresholds }
    }

    /// Each check appends at most one warning. No warnings means no issues found.
    pub fn check(&self, resume_text: &str) -> Vec<String> {
        let mut warnings = Vec::new();
        if resume_text.trim().is_empty() {
            return warnings;
        }

        if resume_text.contains('\t') || resume_text.contains(&" ".repeat(self.thresholds.space_run)) {
            warnings.push(
                "Possible columns or table-like formatting (tabs or runs of spaces); avoid them for ATS parsing."
                    .to_string(),
            );
        }

        if IMAGE_MARKER.is_match(resume_text) {
            warnings.push("Images or image tags detected; remove images for ATS parsing.".to_string());
        }

        let words = resume_text.split_whitespace().count();
        let lines = resume_text.lines().filter(|line| !line.trim().is_empty()).count();
        // Either bound: a full resume on four long lines is still suspect
        if lines < self.thresholds.min_lines || words < self.thresholds.min_words {
            warnings.push(format!(
                "Short resume text detected ({words} words, {lines} non-empty lines); check that the full content was extracted."
            ));
        }

        let mut glyphs: Vec<char> = Vec::new();
        for c in resume_text.chars().filter(|c| NON_STANDARD_BULLETS.contains(c)) {
            if !glyphs.contains(&c) {
                glyphs.push(c);
            }
        }
        if !glyphs.is_empty() {
            let found: Vec<String> = glyphs.iter().map(|c| c.to_string()).collect();
            warnings.push(format!(
                "Non-standard bullet characters detected ({}); use plain round bullets or hyphens.",
                found.join(" ")
            ));
        }

        warnings
    }
}

/// Check with the default thresholds.
pub fn check_formatting(resume_text: &str) -> Vec<String> {
    FormattingChecker::default().check(resume_text)
}
