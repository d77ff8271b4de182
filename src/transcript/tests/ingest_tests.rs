//! Unit tests for raw segment ingestion and roles.

use rstest::rstest;
use serde_json::json;

use crate::transcript::domain::{Element, Message, Role, Transcript};
use crate::transcript::error::TranscriptError;

#[rstest]
fn segments_become_elements_in_order() {
    let mut transcript = Transcript::new();

    transcript
        .add_message(
            "1302425",
            Role::Pl,
            "张三",
            "2024-03-01 20:15:03",
            &[
                json!({"type": "text", "data": {"text": "看这个"}}),
                json!({"type": "image", "data": {"url": "http://a.com/1.png"}}),
            ],
        )
        .expect("segments should ingest");

    assert_eq!(transcript.len(), 1);
    assert_eq!(
        transcript.messages()[0].elements(),
        [Element::text("看这个"), Element::image("http://a.com/1.png")]
    );
}

#[rstest]
fn unsupported_segment_type_is_rejected() {
    let mut transcript = Transcript::new();

    let err = transcript
        .add_message(
            "1302425",
            Role::Pl,
            "张三",
            "2024-03-01 20:15:03",
            &[
                json!({"type": "text", "data": {"text": "听"}}),
                json!({"type": "record", "data": {"file": "a.amr"}}),
            ],
        )
        .expect_err("voice segments are unsupported");

    assert!(matches!(err, TranscriptError::UnsupportedElementType(ref kind) if kind == "record"));
    assert!(transcript.is_empty());
}

#[rstest]
#[case::no_data(json!({"type": "text"}))]
#[case::no_text(json!({"type": "text", "data": {}}))]
#[case::no_type(json!({"data": {"text": "hi"}}))]
#[case::numeric_url(json!({"type": "image", "data": {"url": 7}}))]
fn malformed_segments_are_rejected(#[case] segment: serde_json::Value) {
    let err = Element::from_segment(&segment).expect_err("segment is malformed");
    assert!(matches!(err, TranscriptError::MalformedSegment(_)));
}

#[rstest]
#[case("DICER", Role::Dicer)]
#[case("GM", Role::Gm)]
#[case("KP", Role::Gm)]
#[case("PL", Role::Pl)]
#[case("OB", Role::Ob)]
fn roles_parse_from_names(#[case] name: &str, #[case] expected: Role) {
    assert_eq!(Role::try_from(name).expect("role should parse"), expected);
}

#[rstest]
fn unknown_role_is_rejected() {
    let err = Role::try_from("NPC").expect_err("unknown role");
    assert!(matches!(err, TranscriptError::InvalidRole(ref name) if name == "NPC"));
}

#[rstest]
fn transcript_serialises_as_a_message_list() {
    let transcript: Transcript = [Message::new(
        "1302425",
        Role::Gm,
        "守秘人",
        "2024-03-01 20:15:03",
        vec![Element::text("雨停了。")],
    )]
    .into_iter()
    .collect();

    let encoded = serde_json::to_value(&transcript).expect("transcript should serialise");

    assert_eq!(encoded[0]["role"], "GM");
    assert_eq!(encoded[0]["elements"][0]["type"], "text");
    assert_eq!(encoded[0]["elements"][0]["content"], "雨停了。");
}
