use comment_contacts::*;
use serde_json::{Value, json};

fn extract(records: &[Value]) -> Extraction {
    ExtractionPipeline::default().run(records, &mut SeenSet::new())
}

fn emails(extraction: &Extraction) -> Vec<&str> {
    extraction.rows.iter().map(|r| r.email.as_str()).collect()
}

#[test]
fn test_row_assembly() {
    let records = [json!({
        "commentary": "Interested! jane.doe@example.com",
        "actor": {"name": "Jane Q Public", "linkedinUrl": "https://l.in/jane"},
        "linkedinUrl": "https://l.in/post/1"
    })];
    let extraction = extract(&records);

    assert_eq!(
        extraction.rows,
        vec![OutputRow {
            email: "jane.doe@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Q Public".into(),
            source: "https://l.in/post/1".into(),
            note: "Interested! jane.doe@example.com".into(),
        }]
    );
    assert_eq!(extraction.count(), 1);
}

#[test]
fn test_normalizes_case_and_punctuation() {
    let records = [json!({"comment": "Write to John.Doe@Example.COM."})];
    assert_eq!(emails(&extract(&records)), vec!["john.doe@example.com"]);
}

#[test]
fn test_obfuscated_address() {
    let records = [json!({"text": "name (at) domain (dot) com please"})];
    assert_eq!(emails(&extract(&records)), vec!["name@domain.com"]);
}

#[test]
fn test_no_tld_over_capture() {
    let records = [json!({"text": "contact a@b.coAnd then more"})];
    let extraction = extract(&records);

    assert!(extraction.is_empty());
    assert_eq!(extraction.stats.candidates, 0);
}

#[test]
fn test_multiple_addresses_in_one_comment() {
    let records = [json!({
        "commentary": "me: a@x.io, my colleague: b@y.io",
        "actor": {"name": "Pat Doe"}
    })];
    let extraction = extract(&records);

    assert_eq!(emails(&extraction), vec!["a@x.io", "b@y.io"]);
    assert!(extraction.rows.iter().all(|r| r.first_name == "Pat"));
}

#[test]
fn test_duplicates_within_run() {
    let records = [
        json!({"comment": "twice@y.com", "author": {"name": "First Person"}}),
        json!({"comment": "again TWICE@y.com", "author": {"name": "Second Person"}}),
    ];
    let extraction = extract(&records);

    assert_eq!(emails(&extraction), vec!["twice@y.com"]);
    assert_eq!(extraction.rows[0].first_name, "First");
    assert_eq!(extraction.stats.duplicates, 1);
}

#[test]
fn test_ledger_suppresses_known_address() {
    let mut seen = SeenSet::from_ledger("Email address\ndup@x.com\n");
    let records = [json!({"comment": "DUP@X.com"})];

    let extraction = ExtractionPipeline::default().run(&records, &mut seen);

    assert!(extraction.is_empty());
    assert_eq!(extraction.stats.duplicates, 1);
}

#[test]
fn test_seen_set_grows_across_runs() {
    let pipeline = ExtractionPipeline::default();
    let mut seen = SeenSet::new();
    let records = [json!({"comment": "one@z.com"})];

    assert_eq!(pipeline.run(&records, &mut seen).count(), 1);
    assert_eq!(pipeline.run(&records, &mut seen).count(), 0);
    assert!(seen.contains("one@z.com"));
}

#[test]
fn test_skips_records_without_text() {
    let records = [
        json!({"id": 1, "actor": {"name": "No Text"}}),
        json!({"comment": "   "}),
        json!({"comment": "kept@z.com"}),
    ];
    let extraction = extract(&records);

    assert_eq!(emails(&extraction), vec!["kept@z.com"]);
    assert_eq!(extraction.stats.without_text, 2);
}

#[test]
fn test_skips_non_object_records() {
    let records = [
        json!("just a string a@b.com"),
        json!(42),
        json!(null),
        json!(["c@d.com"]),
        json!({"comment": "e@f.com"}),
    ];
    let extraction = extract(&records);

    assert_eq!(emails(&extraction), vec!["e@f.com"]);
    assert_eq!(extraction.stats.records, 5);
    assert_eq!(extraction.stats.malformed, 4);
}

#[test]
fn test_note_truncated_from_original_text() {
    let text = format!("reach me at x (at) y (dot) com {}", "z".repeat(300));
    let records = [json!({"comment": text})];
    let extraction = extract(&records);

    let expected: String = text.chars().take(240).collect();
    assert_eq!(extraction.rows[0].note, expected);
    assert_eq!(extraction.rows[0].note.chars().count(), 240);
    assert!(extraction.rows[0].note.contains("(at)"));
}

#[test]
fn test_note_counts_characters_not_bytes() {
    let text = format!("{} a@b.com", "é".repeat(250));
    let records = [json!({"comment": text})];
    let extraction = extract(&records);

    assert_eq!(extraction.rows[0].note, "é".repeat(240));
}

#[test]
fn test_custom_note_length() {
    let pipeline = ExtractionPipeline::new(ExtractConfig::default().with_note_chars(5));
    let records = [json!({"comment": "hello a@b.com"})];

    let extraction = pipeline.run(&records, &mut SeenSet::new());

    assert_eq!(extraction.rows[0].note, "hello");
    assert_eq!(pipeline.config().note_chars, 5);
}

#[test]
fn test_source_synthesized_in_rows() {
    let records = [json!({
        "comment": "me@here.net",
        "author": {"firstName": "Old", "lastName": "Shape", "profileUrl": "https://l.in/old"},
        "postId": "p-1"
    })];
    let extraction = extract(&records);

    assert_eq!(extraction.rows[0].source, "https://l.in/old p-1");
    assert_eq!(extraction.rows[0].last_name, "Shape");
}

#[test]
fn test_deterministic_output() {
    let records = [
        json!({"comment": "b@b.com a@a.com"}),
        json!({"commentary": "c (at) c (dot) com", "actor": {"name": "C C"}}),
        json!({"comment": "a@a.com"}),
    ];

    let first = extract(&records);
    let second = extract(&records);

    assert_eq!(first.rows, second.rows);
    assert_eq!(emails(&first), vec!["b@b.com", "a@a.com", "c@c.com"]);
}

#[test]
fn test_dot_word_after_address_not_glued() {
    let records = [json!({"comment": "Email jane@example.com. Dot will reply"})];
    assert_eq!(emails(&extract(&records)), vec!["jane@example.com"]);
}
