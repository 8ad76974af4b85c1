use roster_core::{Person, PersonName, PersonValidationError};
use uuid::Uuid;

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let person = Person::new(id, PersonName::parse("Ada").unwrap());

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "11111111-2222-4333-8444-555555555555",
            "name": "Ada",
        })
    );

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn deserializing_blank_name_is_rejected() {
    let result = serde_json::from_str::<Person>(
        r#"{"id":"11111111-2222-4333-8444-555555555555","name":"  "}"#,
    );
    assert!(result.is_err());
}

#[test]
fn validation_error_has_readable_message() {
    let err = PersonName::parse("").unwrap_err();
    assert_eq!(err, PersonValidationError::Empty);
    assert!(err.to_string().contains("empty"));
}
