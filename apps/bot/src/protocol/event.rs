//! Typed interaction events.
//!
//! Each inbound interaction is decoded exactly once into an [`Event`]
//! before any session logic runs; the lifecycle controller dispatches over
//! this enum and never inspects raw payload strings.

use crate::domain::choice::Choice;
use crate::errors::domain::{DomainError, ValidationKind};

use super::interaction::{
    Interaction, INTERACTION_APPLICATION_COMMAND, INTERACTION_MESSAGE_COMPONENT, INTERACTION_PING,
};

/// Slash command that opens a session.
pub const CHALLENGE_COMMAND: &str = "challenge";
/// Command option carrying the challenger's hidden choice.
pub const OBJECT_OPTION: &str = "object";
/// Component id prefix for the accept affordance; the suffix is the session id.
pub const ACCEPT_PREFIX: &str = "accept_button_";
/// Component id prefix for the choice select; the suffix is the session id.
pub const SELECT_PREFIX: &str = "select_choice_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Liveness probe, answered with a pong.
    Ping,
    /// Open a session; the session id is derived from the interaction id.
    Challenge {
        session_id: String,
        issuer_id: String,
        choice: Choice,
    },
    /// A participant pressed the accept affordance.
    Accept {
        session_id: String,
        participant_id: String,
        token: String,
        message_id: Option<String>,
    },
    /// The responder submitted their pick from the select menu.
    SubmitChoice {
        session_id: String,
        participant_id: String,
        choice: Choice,
        token: String,
        message_id: Option<String>,
    },
}

/// Decode a raw interaction into a typed event.
///
/// Unknown command names and unrecognized interaction kinds are rejected
/// here with a validation error; nothing downstream mutates state for them.
pub fn decode(interaction: Interaction) -> Result<Event, DomainError> {
    match interaction.kind {
        INTERACTION_PING => Ok(Event::Ping),
        INTERACTION_APPLICATION_COMMAND => decode_command(interaction),
        INTERACTION_MESSAGE_COMPONENT => decode_component(interaction),
        other => Err(DomainError::validation(
            ValidationKind::UnknownInteraction,
            format!("unsupported interaction type {other}"),
        )),
    }
}

fn decode_command(interaction: Interaction) -> Result<Event, DomainError> {
    let data = interaction.data.as_ref().ok_or_else(|| {
        DomainError::validation(ValidationKind::MalformedPayload, "command without data")
    })?;
    let name = data.name.as_deref().unwrap_or_default();
    if name != CHALLENGE_COMMAND {
        return Err(DomainError::validation(
            ValidationKind::UnknownCommand,
            format!("unrecognized command {name:?}"),
        ));
    }

    let issuer_id = interaction
        .participant_id()
        .ok_or_else(|| {
            DomainError::validation(ValidationKind::MalformedPayload, "command without a user")
        })?
        .to_string();

    let object = data
        .options
        .iter()
        .find(|o| o.name == OBJECT_OPTION)
        .and_then(|o| o.value.as_str())
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::MalformedPayload,
                format!("challenge command missing the {OBJECT_OPTION:?} option"),
            )
        })?;
    let choice = Choice::parse(object)?;

    Ok(Event::Challenge {
        session_id: interaction.id.clone(),
        issuer_id,
        choice,
    })
}

fn decode_component(interaction: Interaction) -> Result<Event, DomainError> {
    let data = interaction.data.as_ref().ok_or_else(|| {
        DomainError::validation(ValidationKind::MalformedPayload, "component without data")
    })?;
    let custom_id = data.custom_id.as_deref().ok_or_else(|| {
        DomainError::validation(ValidationKind::MalformedPayload, "component without custom_id")
    })?;
    let participant_id = interaction
        .participant_id()
        .ok_or_else(|| {
            DomainError::validation(ValidationKind::MalformedPayload, "component without a user")
        })?
        .to_string();
    let message_id = interaction.message.as_ref().map(|m| m.id.clone());

    if let Some(session_id) = custom_id.strip_prefix(ACCEPT_PREFIX) {
        return Ok(Event::Accept {
            session_id: session_id.to_string(),
            participant_id,
            token: interaction.token.clone(),
            message_id,
        });
    }

    if let Some(session_id) = custom_id.strip_prefix(SELECT_PREFIX) {
        let value = data.values.first().ok_or_else(|| {
            DomainError::validation(
                ValidationKind::MalformedPayload,
                "choice select submitted without a value",
            )
        })?;
        let choice = Choice::parse(value)?;
        return Ok(Event::SubmitChoice {
            session_id: session_id.to_string(),
            participant_id,
            choice,
            token: interaction.token.clone(),
            message_id,
        });
    }

    Err(DomainError::validation(
        ValidationKind::UnknownInteraction,
        format!("unrecognized component {custom_id:?}"),
    ))
}
