use dispo::InteractionError;
use dispo::api::interaction::{Interaction, extract_fields, parse_interaction};
use dispo::core::models::{CommandOption, ExtractedFields};
use serde_json::json;

fn option(name: &str, value: &str) -> CommandOption {
    CommandOption {
        name: name.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn absent_body_is_bad_request() {
    assert_eq!(parse_interaction(None), Err(InteractionError::BadRequest));
}

#[test]
fn ping_stops_inspection() {
    let body = json!({ "type": 1, "data": 42 });
    assert_eq!(parse_interaction(Some(&body)), Ok(Interaction::Ping));
}

#[test]
fn command_options_kept_in_order() {
    let body = json!({
        "type": 2,
        "data": { "options": [
            { "name": "extra", "value": "1" },
            { "name": "title", "value": "Standup" }
        ] }
    });
    assert_eq!(
        parse_interaction(Some(&body)),
        Ok(Interaction::ApplicationCommand {
            options: vec![option("extra", "1"), option("title", "Standup")]
        })
    );
}

#[test]
fn empty_options_parse_but_extract_fails() {
    let body = json!({ "type": 2, "data": { "options": [] } });
    let Ok(Interaction::ApplicationCommand { options }) = parse_interaction(Some(&body)) else {
        panic!("expected a command");
    };
    assert!(options.is_empty());
    assert_eq!(extract_fields(&options), Err(InteractionError::BadRequest));
}

#[test]
fn parsing_stops_once_title_and_role_seen() {
    let body = json!({
        "type": 2,
        "data": { "options": [
            { "name": "role", "value": "eng" },
            { "name": "title", "value": "Standup" },
            { "name": "title", "value": 7 }
        ] }
    });
    assert_eq!(
        parse_interaction(Some(&body)),
        Ok(Interaction::ApplicationCommand {
            options: vec![option("role", "eng"), option("title", "Standup")]
        })
    );
}

#[test]
fn one_bad_option_rejects_all() {
    let body = json!({
        "type": 2,
        "data": { "options": [
            { "name": "title", "value": "Standup" },
            { "name": "note", "value": ["x"] }
        ] }
    });
    assert_eq!(parse_interaction(Some(&body)), Err(InteractionError::BadRequest));
}

#[test]
fn non_string_name_rejected() {
    let body = json!({ "type": 2, "data": { "options": [{ "name": 1, "value": "x" }] } });
    assert_eq!(parse_interaction(Some(&body)), Err(InteractionError::BadRequest));
}

#[test]
fn title_combined_with_role() {
    assert_eq!(
        extract_fields(&[option("title", "Standup"), option("role", "eng")]),
        Ok(ExtractedFields {
            title: "Standup (eng)".to_string(),
            role: Some("eng".to_string()),
        })
    );
}

#[test]
fn title_alone_unchanged() {
    assert_eq!(
        extract_fields(&[option("title", "Standup"), option("colour", "blue")]),
        Ok(ExtractedFields {
            title: "Standup".to_string(),
            role: None,
        })
    );
}

#[test]
fn role_without_title_fails() {
    assert_eq!(
        extract_fields(&[option("role", "eng")]),
        Err(InteractionError::BadRequest)
    );
}
