use dispo::api::parsing::{JsonKind, is_array, is_object_with_key, is_of_type};
use serde_json::{Value, json};

fn samples() -> Vec<Value> {
    vec![
        Value::Null,
        json!(true),
        json!(0),
        json!(1.5),
        json!("type"),
        json!([]),
        json!(["type"]),
        json!({}),
        json!({ "type": null }),
        json!({ "nested": { "type": 1 } }),
    ]
}

#[test]
fn predicates_are_total() {
    for value in samples() {
        let _ = is_object_with_key(&value, "type");
        let _ = is_array(&value);
        for kind in [
            JsonKind::String,
            JsonKind::Number,
            JsonKind::Bool,
            JsonKind::Object,
            JsonKind::Array,
        ] {
            let _ = is_of_type(&value, kind);
        }
    }
}

#[test]
fn object_with_key_requires_object_and_key() {
    assert!(is_object_with_key(&json!({ "type": 1 }), "type"));
    // Present but null still counts as present
    assert!(is_object_with_key(&json!({ "type": null }), "type"));
    assert!(!is_object_with_key(&json!({ "nested": { "type": 1 } }), "type"));
    assert!(!is_object_with_key(&json!(["type"]), "type"));
    assert!(!is_object_with_key(&json!("type"), "type"));
    assert!(!is_object_with_key(&Value::Null, "type"));
}

#[test]
fn of_type_rejects_null() {
    assert!(is_of_type(&json!("x"), JsonKind::String));
    assert!(!is_of_type(&Value::Null, JsonKind::String));
    assert!(!is_of_type(&Value::Null, JsonKind::Object));
    assert!(!is_of_type(&json!(1), JsonKind::String));
    assert!(is_of_type(&json!(1), JsonKind::Number));
    assert!(is_of_type(&json!(false), JsonKind::Bool));
    assert!(is_of_type(&json!({}), JsonKind::Object));
    assert!(is_of_type(&json!([]), JsonKind::Array));
}

#[test]
fn array_only_for_arrays() {
    assert!(is_array(&json!([])));
    assert!(is_array(&json!([{ "name": "title" }])));
    assert!(!is_array(&json!({ "0": "a", "length": 1 })));
    assert!(!is_array(&json!("[]")));
    assert!(!is_array(&Value::Null));
}
