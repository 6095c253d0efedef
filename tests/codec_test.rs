//! Integration tests for ErrorListCodec.

use std::any::TypeId;

use serde_json::json;
use violation_codec::codes::{constraint, wire, CODE_MAPPINGS};
use violation_codec::{
    ErrorListCodec, FieldNameConverter, Violation, ViolationList, WireError, WireErrorList,
    DEFAULT_CODE,
};

fn codec() -> ErrorListCodec {
    ErrorListCodec::new().with_name_converter(FieldNameConverter)
}

/// First internal code per wire code, in declaration order.
fn unique_mappings() -> Vec<(&'static str, &'static str)> {
    let mut seen = Vec::new();
    let mut unique = Vec::new();
    for &(internal, wire_code) in CODE_MAPPINGS {
        if seen.contains(&wire_code) {
            continue;
        }
        seen.push(wire_code);
        unique.push((internal, wire_code));
    }
    unique
}

#[test]
fn test_normalize_every_mapped_code() {
    for &(internal, wire_code) in CODE_MAPPINGS {
        let list = ViolationList::from(vec![Violation::new("[d][e]", "a").with_code(internal)]);

        assert_eq!(
            codec().normalize(&list),
            json!({"errors": [{"message": "a", "code": wire_code, "field": "d.e"}]}),
            "internal code {}",
            internal
        );
    }
}

#[test]
fn test_normalize_unmapped_code_uses_default() {
    let list = ViolationList::from(vec![
        Violation::new("[a]", "unknown").with_code("c1051bb4-d103-4f74-8988-acbcafc7fdc3"),
        Violation::new("[b]", "missing"),
    ]);

    let wire_list = codec().serialize(&list);
    assert_eq!(wire_list.errors[0].code, DEFAULT_CODE);
    assert_eq!(wire_list.errors[1].code, "validation.invalid");
}

#[test]
fn test_normalize_preserves_order_and_duplicates() {
    let list = ViolationList::from(vec![
        Violation::new("[z]", "first").with_code(constraint::LENGTH_TOO_SHORT),
        Violation::new("[a]", "second").with_code(constraint::LENGTH_TOO_SHORT),
        Violation::new("[z]", "first").with_code(constraint::LENGTH_TOO_SHORT),
    ]);

    let wire_list = codec().serialize(&list);
    assert_eq!(
        wire_list.errors,
        vec![
            WireError::new("first", wire::LENGTH_MIN, "z"),
            WireError::new("second", wire::LENGTH_MIN, "a"),
            WireError::new("first", wire::LENGTH_MIN, "z"),
        ]
    );
}

#[test]
fn test_normalize_empty_list() {
    assert_eq!(codec().normalize(&ViolationList::new()), json!({"errors": []}));
}

#[test]
fn test_denormalize_every_wire_code() {
    for (internal, wire_code) in unique_mappings() {
        let data = json!({
            "errors": [{"message": "a", "code": wire_code, "field": "b.c"}]
        });

        let expected = ViolationList::from(vec![Violation::new("[b][c]", "a").with_code(internal)]);
        assert_eq!(codec().deserialize(&data), expected, "wire code {}", wire_code);
    }
}

#[test]
fn test_denormalize_shared_code_resolves_to_first_declared() {
    let data = json!({
        "errors": [
            {"message": "a", "code": wire::NUMERIC_BETWEEN, "field": "x"},
            {"message": "b", "code": wire::TIMEZONE, "field": "y"},
        ]
    });

    let list = codec().deserialize(&data);
    assert_eq!(
        list.get(0).and_then(|v| v.code.as_deref()),
        Some(constraint::GREATER_THAN_OR_EQUAL_TOO_LOW)
    );
    assert_eq!(
        list.get(1).and_then(|v| v.code.as_deref()),
        Some(constraint::TIMEZONE_IDENTIFIER)
    );
}

#[test]
fn test_denormalize_unknown_or_missing_code_is_none() {
    let data = json!({
        "errors": [
            {"message": "a", "code": "validation.something_new", "field": "x"},
            {"message": "b", "code": "", "field": "y"},
            {"message": "c", "field": "z"},
            {"message": "d", "code": wire::ALPHA, "field": "w"},
        ]
    });

    let list = codec().deserialize(&data);
    assert_eq!(list.len(), 4);
    assert!(list.iter().all(|v| v.code.is_none()));
}

#[test]
fn test_denormalize_empty_or_missing_errors() {
    assert!(codec().deserialize(&json!({"errors": []})).is_empty());
    assert!(codec().deserialize(&json!({})).is_empty());
    assert!(codec().deserialize(&json!({"other": [1]})).is_empty());
}

#[test]
fn test_denormalize_drops_incomplete_entries() {
    let data = json!({
        "errors": [
            {"message": "keep one", "code": wire::EMAIL, "field": "email"},
            {"code": wire::EMAIL, "field": "no_message"},
            {"message": "no field", "code": wire::EMAIL},
            {"message": "", "field": "blank_message"},
            {"message": "blank field", "field": ""},
            "not an object",
            {"message": "keep two", "field": "name"},
        ]
    });

    let list = codec().deserialize(&data);
    let messages: Vec<_> = list.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(messages, vec!["keep one", "keep two"]);
    assert_eq!(list.at_path("[name]").len(), 1);
}

#[test]
fn test_denormalize_coerces_message_to_string() {
    let data = json!({"errors": [{"message": 404, "field": "status"}]});

    let list = codec().deserialize(&data);
    assert_eq!(list.get(0).map(|v| v.message.as_str()), Some("404"));
}

#[test]
fn test_round_trip_through_wire() {
    let list = ViolationList::from(vec![
        Violation::new("[user][email]", "bad email").with_code(constraint::EMAIL_INVALID_FORMAT),
        Violation::new("[user][age]", "too young").with_code(constraint::GREATER_THAN_TOO_LOW),
        Violation::new("[terms]", "accept").with_code(constraint::IS_FALSE_NOT_FALSE),
    ]);

    let restored = codec().deserialize(&codec().normalize(&list));
    assert_eq!(restored, list);
}

#[test]
fn test_supports_normalization() {
    let codec = codec();
    assert!(codec.supports_normalization(&ViolationList::new(), Some("json")));
    assert!(!codec.supports_normalization(&ViolationList::new(), Some("xml")));
    assert!(!codec.supports_normalization(&json!({}), Some("json")));
    assert!(!codec.supports_normalization(&Vec::<Violation>::new(), Some("json")));
}

#[test]
fn test_supports_denormalization() {
    let codec = codec();
    let target = TypeId::of::<ViolationList>();

    assert!(codec.supports_denormalization(&json!({"errors": []}), target, None));
    assert!(codec.supports_denormalization(&json!({"errors": null}), target, Some("json")));
    assert!(!codec.supports_denormalization(&json!({}), target, None));
    assert!(!codec.supports_denormalization(&json!([{"errors": []}]), target, None));
    assert!(!codec.supports_denormalization(
        &json!({"errors": []}),
        TypeId::of::<String>(),
        None
    ));
}

#[test]
fn test_normalized_payload_parses_as_wire_list() {
    let list = ViolationList::from(vec![
        Violation::new("[user][email]", "bad email").with_code(constraint::EMAIL_INVALID_FORMAT),
        Violation::new("[user][name]", "blank"),
    ]);

    let payload = codec().normalize(&list);
    let wire_list: WireErrorList = serde_json::from_value(payload).unwrap();

    assert_eq!(wire_list, codec().serialize(&list));
    assert_eq!(wire_list.for_field("user.name")[0].code, DEFAULT_CODE);
}
