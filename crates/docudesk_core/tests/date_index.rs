use docudesk_core::{build_date_index, DateKind, Document, DocumentStore};

fn dated(id: &str, issued: Option<&str>, deadline: Option<&str>) -> Document {
    Document {
        id: id.to_string(),
        title: format!("Document {id}"),
        tags: Vec::new(),
        category: "Operations".to_string(),
        department: "Safety".to_string(),
        policy_type: "Policy".to_string(),
        issued_date: issued.map(str::to_string),
        deadline_date: deadline.map(str::to_string),
        short_summary: "s".to_string(),
        long_summary: "l".to_string(),
        content: "c".to_string(),
        relations: Vec::new(),
    }
}

#[test]
fn seed_fixture_dates_classify_as_authored() {
    let store = DocumentStore::seeded().unwrap();
    let index = build_date_index(store.all());

    // Issue dates with no competing deadline stay `Issued`.
    assert_eq!(index["2025-09-05"].kind, DateKind::Issued);
    assert_eq!(index["2025-09-15"].kind, DateKind::Issued);
    assert_eq!(index["2025-09-20"].kind, DateKind::Issued);

    // Deadlines with no competing issue date stay `Deadline`.
    assert_eq!(index["2025-10-15"].kind, DateKind::Deadline);
    assert_eq!(index["2025-11-01"].kind, DateKind::Deadline);

    assert_eq!(index["2025-10-15"].document_ids, vec!["doc-001".to_string()]);
    assert!(index.get("2025-12-25").is_none());
}

#[test]
fn issued_and_deadline_collision_across_documents_is_both() {
    let docs = vec![
        dated("doc-a", Some("2025-10-15"), None),
        dated("doc-b", None, Some("2025-10-15")),
    ];
    let index = build_date_index(&docs);
    let entry = &index["2025-10-15"];
    assert_eq!(entry.kind, DateKind::Both);
    assert_eq!(
        entry.document_ids,
        vec!["doc-a".to_string(), "doc-b".to_string()]
    );
}

#[test]
fn upgrade_rule_is_commutative_and_idempotent() {
    let issued_first = vec![
        dated("doc-a", Some("2025-10-15"), None),
        dated("doc-b", None, Some("2025-10-15")),
        dated("doc-c", Some("2025-10-15"), None),
    ];
    let deadline_first = vec![
        dated("doc-b", None, Some("2025-10-15")),
        dated("doc-c", Some("2025-10-15"), None),
        dated("doc-a", Some("2025-10-15"), None),
    ];

    assert_eq!(
        build_date_index(&issued_first)["2025-10-15"].kind,
        DateKind::Both
    );
    assert_eq!(
        build_date_index(&deadline_first)["2025-10-15"].kind,
        DateKind::Both
    );
}

#[test]
fn absent_dates_contribute_nothing() {
    let docs = vec![dated("doc-a", None, None)];
    assert!(build_date_index(&docs).is_empty());
}
