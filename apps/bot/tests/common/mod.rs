#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use bot::config::settings::Settings;
use bot::notify::RecordingMessenger;
use bot::state::app_state::AppState;
use serde_json::{json, Value};

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    bot_test_support::logging::init();
}

/// App state wired to a recording messenger.
pub fn test_state() -> (AppState, Arc<RecordingMessenger>) {
    let messenger = Arc::new(RecordingMessenger::default());
    let state = AppState::new(Settings::for_tests(), messenger.clone());
    (state, messenger)
}

pub fn challenge_body(interaction_id: &str, user_id: &str, object: &str) -> Value {
    json!({
        "id": interaction_id,
        "type": 2,
        "token": format!("tok-{interaction_id}"),
        "member": { "user": { "id": user_id } },
        "data": {
            "name": "challenge",
            "options": [{ "name": "object", "value": object }]
        }
    })
}

pub fn accept_body(session_id: &str, user_id: &str, message_id: &str) -> Value {
    json!({
        "id": format!("accept-{session_id}"),
        "type": 3,
        "token": "tok-accept",
        "member": { "user": { "id": user_id } },
        "message": { "id": message_id },
        "data": { "custom_id": format!("accept_button_{session_id}") }
    })
}

pub fn select_body(session_id: &str, user_id: &str, value: &str, message_id: &str) -> Value {
    json!({
        "id": format!("select-{session_id}"),
        "type": 3,
        "token": "tok-select",
        "member": { "user": { "id": user_id } },
        "message": { "id": message_id },
        "data": {
            "custom_id": format!("select_choice_{session_id}"),
            "values": [value]
        }
    })
}
