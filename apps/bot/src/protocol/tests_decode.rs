use serde_json::json;

use crate::domain::choice::Choice;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::protocol::event::{decode, Event};
use crate::protocol::interaction::Interaction;

fn parse(value: serde_json::Value) -> Interaction {
    serde_json::from_value(value).unwrap()
}

#[test]
fn decodes_ping() {
    let interaction = parse(json!({ "id": "i1", "type": 1, "token": "t" }));
    assert_eq!(decode(interaction).unwrap(), Event::Ping);
}

#[test]
fn decodes_challenge_command_with_member_user() {
    let interaction = parse(json!({
        "id": "i42",
        "type": 2,
        "token": "tok",
        "member": { "user": { "id": "U1" } },
        "data": {
            "name": "challenge",
            "options": [{ "name": "object", "value": "rock" }]
        }
    }));

    let event = decode(interaction).unwrap();
    assert_eq!(
        event,
        Event::Challenge {
            session_id: "i42".into(),
            issuer_id: "U1".into(),
            choice: Choice::Rock,
        }
    );
}

#[test]
fn decodes_challenge_command_with_bare_user() {
    let interaction = parse(json!({
        "id": "i43",
        "type": 2,
        "token": "tok",
        "user": { "id": "U7" },
        "data": {
            "name": "challenge",
            "options": [{ "name": "object", "value": "spock" }]
        }
    }));

    match decode(interaction).unwrap() {
        Event::Challenge { issuer_id, choice, .. } => {
            assert_eq!(issuer_id, "U7");
            assert_eq!(choice, Choice::Spock);
        }
        other => panic!("expected challenge, got {other:?}"),
    }
}

#[test]
fn unknown_command_is_a_validation_error() {
    let interaction = parse(json!({
        "id": "i1",
        "type": 2,
        "token": "tok",
        "member": { "user": { "id": "U1" } },
        "data": { "name": "dance" }
    }));

    let err = decode(interaction).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnknownCommand, _)
    ));
}

#[test]
fn unknown_interaction_kind_is_rejected() {
    let interaction = parse(json!({ "id": "i1", "type": 9, "token": "tok" }));
    let err = decode(interaction).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnknownInteraction, _)
    ));
}

#[test]
fn decodes_accept_component() {
    let interaction = parse(json!({
        "id": "i2",
        "type": 3,
        "token": "tok-accept",
        "member": { "user": { "id": "U2" } },
        "message": { "id": "msg9" },
        "data": { "custom_id": "accept_button_i42" }
    }));

    let event = decode(interaction).unwrap();
    assert_eq!(
        event,
        Event::Accept {
            session_id: "i42".into(),
            participant_id: "U2".into(),
            token: "tok-accept".into(),
            message_id: Some("msg9".into()),
        }
    );
}

#[test]
fn decodes_choice_select_component() {
    let interaction = parse(json!({
        "id": "i3",
        "type": 3,
        "token": "tok-select",
        "member": { "user": { "id": "U2" } },
        "message": { "id": "msg10" },
        "data": { "custom_id": "select_choice_i42", "values": ["scissors"] }
    }));

    let event = decode(interaction).unwrap();
    assert_eq!(
        event,
        Event::SubmitChoice {
            session_id: "i42".into(),
            participant_id: "U2".into(),
            choice: Choice::Scissors,
            token: "tok-select".into(),
            message_id: Some("msg10".into()),
        }
    );
}

#[test]
fn select_without_values_is_malformed() {
    let interaction = parse(json!({
        "id": "i3",
        "type": 3,
        "token": "tok",
        "member": { "user": { "id": "U2" } },
        "data": { "custom_id": "select_choice_i42", "values": [] }
    }));

    let err = decode(interaction).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MalformedPayload, _)
    ));
}

#[test]
fn unrecognized_component_id_is_rejected() {
    let interaction = parse(json!({
        "id": "i3",
        "type": 3,
        "token": "tok",
        "member": { "user": { "id": "U2" } },
        "data": { "custom_id": "mystery_button_1" }
    }));

    let err = decode(interaction).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnknownInteraction, _)
    ));
}

#[test]
fn out_of_catalog_select_value_fails_fast() {
    let interaction = parse(json!({
        "id": "i3",
        "type": 3,
        "token": "tok",
        "member": { "user": { "id": "U2" } },
        "data": { "custom_id": "select_choice_i42", "values": ["banana"] }
    }));

    let err = decode(interaction).unwrap_err();
    assert!(matches!(err, DomainError::InvalidChoice(_)));
}
