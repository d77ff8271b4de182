//! Unit tests for the stored value codec and store keys.

use rstest::rstest;
use std::collections::BTreeMap;

use crate::storage::domain::{StoreKey, StoredValue};
use crate::storage::error::StoreError;

fn character_card() -> StoredValue {
    let mut skills = BTreeMap::new();
    skills.insert("侦查".to_owned(), StoredValue::from(60_i64));
    skills.insert("图书馆".to_owned(), StoredValue::from(45_i64));

    let mut card = BTreeMap::new();
    card.insert("name".to_owned(), StoredValue::from("欧若可"));
    card.insert("luck".to_owned(), StoredValue::from(0.5_f64));
    card.insert("alive".to_owned(), StoredValue::from(true));
    card.insert("skills".to_owned(), StoredValue::from(skills));
    card.insert(
        "items".to_owned(),
        StoredValue::from(vec![StoredValue::from("手电筒"), StoredValue::Null]),
    );
    StoredValue::from(card)
}

#[rstest]
fn nested_card_survives_the_codec() {
    let card = character_card();

    let document = card.encode().expect("card should encode");
    let decoded = StoredValue::decode(&document).expect("document should decode");

    assert_eq!(decoded, card);
    assert_eq!(
        decoded
            .get("skills")
            .and_then(|skills| skills.get("侦查"))
            .and_then(StoredValue::as_int),
        Some(60)
    );
}

#[rstest]
#[case::integer("42", StoredValue::Int(42))]
#[case::float("42.5", StoredValue::Float(42.5))]
#[case::text("\"42\"", StoredValue::Text("42".to_owned()))]
#[case::null("null", StoredValue::Null)]
fn decoding_keeps_numbers_and_text_apart(#[case] document: &str, #[case] expected: StoredValue) {
    let decoded = StoredValue::decode(document).expect("document should decode");
    assert_eq!(decoded, expected);
}

#[rstest]
fn code_like_text_is_kept_as_plain_text() {
    let document = "\"__import__('os').system('rm -rf /')\"";

    let decoded = StoredValue::decode(document).expect("document should decode");

    assert_eq!(
        decoded.as_text(),
        Some("__import__('os').system('rm -rf /')")
    );
}

#[rstest]
#[case::nan(f64::NAN)]
#[case::infinity(f64::INFINITY)]
fn non_finite_floats_are_rejected(#[case] value: f64) {
    let nested = StoredValue::from(vec![StoredValue::from(value)]);

    let err = nested.encode().expect_err("non-finite float should be rejected");

    assert!(matches!(err, StoreError::NonFiniteFloat));
}

#[rstest]
fn malformed_documents_report_codec_errors() {
    let err = StoredValue::decode("{\"name\": ").expect_err("truncated document");
    assert!(matches!(err, StoreError::Codec(_)));
}

#[rstest]
fn store_keys_are_scoped() {
    let key = StoreKey::new("card", "1302425");

    assert_eq!(key.as_str(), "card:1302425");
    assert_eq!(key.to_string(), "card:1302425");
    assert_ne!(key, StoreKey::new("status", "1302425"));
}
