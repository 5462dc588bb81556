//! Inbound interaction payloads, as delivered by the platform webhook.
//!
//! These are deliberately loose DTOs: the platform sends many more fields
//! than the game needs, and a field's presence depends on the interaction
//! kind. Semantic validation happens in [`super::event::decode`], once.

use serde::Deserialize;

/// Raw interaction kinds on the wire.
pub const INTERACTION_PING: u8 = 1;
pub const INTERACTION_APPLICATION_COMMAND: u8 = 2;
pub const INTERACTION_MESSAGE_COMPONENT: u8 = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub token: String,
    pub data: Option<InteractionData>,
    pub member: Option<Member>,
    pub user: Option<User>,
    pub message: Option<MessageRef>,
}

impl Interaction {
    /// The acting participant: guild events carry `member.user`, direct
    /// messages a bare `user`.
    pub fn participant_id(&self) -> Option<&str> {
        self.member
            .as_ref()
            .map(|m| m.user.id.as_str())
            .or_else(|| self.user.as_ref().map(|u| u.id.as_str()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: Option<String>,
    pub custom_id: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageRef {
    pub id: String,
}
