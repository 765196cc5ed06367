use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::TextFingerprint;

/// Plain text handed over by the document-to-text extraction step.
///
/// Any string is valid, including an empty one; degenerate text simply
/// produces zero scores and empty keyword lists downstream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentText(String);

impl DocumentText {
    pub fn new(text: impl Into<String>) -> Self {
        DocumentText(text.into())
    }

    /// Decode extracted bytes. Invalid UTF-8 sequences become U+FFFD,
    /// which the tokenizer treats as a separator, so decoding never fails.
    pub fn from_bytes(raw: &[u8]) -> Self {
        DocumentText(String::from_utf8_lossy(raw).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn fingerprint(&self) -> TextFingerprint {
        TextFingerprint::from_content(self.0.as_bytes())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for DocumentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for DocumentText {
    fn from(text: String) -> Self {
        DocumentText(text)
    }
}

impl From<&str> for DocumentText {
    fn from(text: &str) -> Self {
        DocumentText(text.to_string())
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
