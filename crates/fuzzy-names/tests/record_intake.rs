use fuzzy_names::matching::people_from_records;
use fuzzy_names::{Matcher, NameRecord, PersonId, RecordError};

const REFERENCE_JSON: &str = r#"[
    {"id": "1003", "first": "Theodore", "last": "Rose"},
    {"id": "1011", "first_name": "Samantha", "last_name": "Grone, Esq."},
    {"id": "1012", "first": "Maria", "last": "Malygina, PhD"}
]"#;

#[test]
fn json_records_resolve_into_an_id_mapping() {
    let reference: Vec<NameRecord> =
        serde_json::from_str(REFERENCE_JSON).expect("reference records parse");
    let queries = vec![
        NameRecord::new(Some("103"), "Theo", "Rose"),
        NameRecord::new(Some("111"), "Sam", "Grone"),
        NameRecord::new(Some("199"), "Walter", "White"),
    ];

    let matcher = Matcher::new(people_from_records(reference).expect("valid reference"));
    let queries = people_from_records(queries).expect("valid queries");
    let mapping = matcher.resolve_all(&queries).id_mapping();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping[&PersonId::from("103")], PersonId::from("1003"));
    assert_eq!(mapping[&PersonId::from("111")], PersonId::from("1011"));
    assert!(!mapping.contains_key(&PersonId::from("199")));
}

#[test]
fn invalid_record_is_rejected_before_indexing() {
    let records = vec![
        NameRecord::new(Some("1"), "Theodore", "Rose"),
        NameRecord::new(Some("2"), "", "Grone"),
    ];

    match people_from_records(records) {
        Err(RecordError::AtPosition { position, .. }) => assert_eq!(position, 1),
        other => panic!("expected positioned record error, got {other:?}"),
    }
}
