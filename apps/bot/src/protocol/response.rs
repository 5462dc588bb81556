//! Outbound reply payloads for the interactions webhook.

use serde::Serialize;

use crate::domain::choice::Choice;

use super::event::{ACCEPT_PREFIX, SELECT_PREFIX};

/// Reply kinds on the wire.
pub const REPLY_PONG: u8 = 1;
pub const REPLY_CHANNEL_MESSAGE: u8 = 4;
/// Acknowledge a component interaction without sending anything visible;
/// used as the silent-drop reply for late or duplicate submissions.
pub const REPLY_DEFERRED_UPDATE: u8 = 6;

/// Message flag marking a reply visible only to the acting user.
pub const FLAG_EPHEMERAL: u64 = 1 << 6;

const COMPONENT_ACTION_ROW: u8 = 1;
const COMPONENT_BUTTON: u8 = 2;
const COMPONENT_STRING_SELECT: u8 = 3;
const BUTTON_STYLE_PRIMARY: u8 = 1;

/// The synchronous reply to an interaction.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionReply {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ReplyData>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplyData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Component {
    ActionRow {
        #[serde(rename = "type")]
        kind: u8,
        components: Vec<Component>,
    },
    Button {
        #[serde(rename = "type")]
        kind: u8,
        style: u8,
        label: String,
        custom_id: String,
    },
    StringSelect {
        #[serde(rename = "type")]
        kind: u8,
        custom_id: String,
        options: Vec<SelectOption>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl InteractionReply {
    pub fn pong() -> Self {
        Self {
            kind: REPLY_PONG,
            data: None,
        }
    }

    /// Invisible acknowledgment of a component interaction.
    pub fn deferred_update() -> Self {
        Self {
            kind: REPLY_DEFERRED_UPDATE,
            data: None,
        }
    }

    /// Public channel message.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: REPLY_CHANNEL_MESSAGE,
            data: Some(ReplyData {
                content: Some(content.into()),
                ..ReplyData::default()
            }),
        }
    }

    /// Message visible only to the acting user.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            kind: REPLY_CHANNEL_MESSAGE,
            data: Some(ReplyData {
                content: Some(content.into()),
                flags: Some(FLAG_EPHEMERAL),
                ..ReplyData::default()
            }),
        }
    }

    /// Attach a single action row of components to the reply.
    pub fn with_action_row(mut self, children: Vec<Component>) -> Self {
        let row = Component::ActionRow {
            kind: COMPONENT_ACTION_ROW,
            components: children,
        };
        let data = self.data.get_or_insert_with(ReplyData::default);
        data.components.get_or_insert_with(Vec::new).push(row);
        self
    }
}

impl Component {
    /// The accept affordance on a challenge post; its id carries the
    /// session id.
    pub fn accept_button(session_id: &str) -> Self {
        Component::Button {
            kind: COMPONENT_BUTTON,
            style: BUTTON_STYLE_PRIMARY,
            label: "Accept".to_string(),
            custom_id: format!("{ACCEPT_PREFIX}{session_id}"),
        }
    }

    /// The responder's select menu, populated from an already-shuffled
    /// option list.
    pub fn choice_select(session_id: &str, options: &[Choice]) -> Self {
        Component::StringSelect {
            kind: COMPONENT_STRING_SELECT,
            custom_id: format!("{SELECT_PREFIX}{session_id}"),
            options: options
                .iter()
                .map(|c| SelectOption {
                    label: c.label().to_string(),
                    value: c.id().to_string(),
                })
                .collect(),
        }
    }
}
