use resume_match_core::document::DocumentText;
use resume_match_core::scoring::ResumeAnalyzer;
use resume_match_core::text::tokenize;

#[test]
fn invalid_utf8_decodes_lossily() {
    // Invalid UTF-8 sequence around valid words
    let mut raw = b"Rust ".to_vec();
    raw.extend_from_slice(&[0, 159, 146, 150]);
    raw.extend_from_slice(b" Kafka");

    let doc = DocumentText::from_bytes(&raw);
    assert!(doc.as_str().contains('\u{fffd}'));
    assert_eq!(tokenize(doc.as_str()), vec!["rust".to_string(), "kafka".to_string()]);
}

#[test]
fn same_content_same_fingerprint() {
    let a = DocumentText::new("Hello world");
    let b = DocumentText::from_bytes(b"Hello world");

    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert!(a.fingerprint().as_str().starts_with("sha256:"));
}

#[test]
fn no_newline_normalization() {
    let unix = DocumentText::new("line\n");
    let windows = DocumentText::new("line\r\n");

    assert_ne!(unix.fingerprint(), windows.fingerprint());
}

#[test]
fn blank_documents_are_valid() {
    let empty = DocumentText::default();
    assert!(empty.is_blank());
    assert!(DocumentText::new(" \n\t").is_blank());
    assert!(!DocumentText::new("rust").is_blank());

    let report = ResumeAnalyzer::default().analyze_documents(&empty, &DocumentText::new("Rust engineer"));
    assert_eq!(report.score, 0.0);
    assert!(report.keywords.matched.is_empty());
}

#[test]
fn documents_analyze_like_plain_text() {
    let analyzer = ResumeAnalyzer::default();
    let resume = DocumentText::from("Java developer with SQL experience");
    let jd = DocumentText::from("Senior Java Developer needed with SQL and Hibernate skills".to_string());

    assert_eq!(
        analyzer.analyze_documents(&resume, &jd),
        analyzer.analyze(resume.as_str(), jd.as_str())
    );
}

#[test]
fn serializes_as_plain_string() {
    let doc = DocumentText::new("Rust");
    assert_eq!(serde_json::to_string(&doc).unwrap(), "\"Rust\"");
    assert_eq!(doc.to_string(), "Rust");
    assert_eq!(doc.into_string(), "Rust");
}
