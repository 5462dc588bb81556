//! Session lifecycle controller.
//!
//! One inbound event, one dispatch: open a session (challenge), turn an
//! accepted challenge into a choice prompt (accept), or finalize the game
//! (submit). This is the only place that drives the session store and the
//! result engine.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::choice;
use crate::domain::resolve::resolve;
use crate::domain::session::{Participant, Session};
use crate::error::AppError;
use crate::notify::Messenger;
use crate::protocol::event::Event;
use crate::protocol::response::{Component, InteractionReply};
use crate::store::sessions::SessionStore;

/// Text the ephemeral prompt is edited to once the result has shipped.
const PROMPT_CLOSEOUT: &str = "Nice choice!";

#[derive(Clone)]
pub struct DuelFlow {
    store: Arc<SessionStore>,
    messenger: Arc<dyn Messenger>,
}

impl DuelFlow {
    pub fn new(store: Arc<SessionStore>, messenger: Arc<dyn Messenger>) -> Self {
        Self { store, messenger }
    }

    /// Handle one decoded event and produce the synchronous reply.
    pub async fn handle(&self, event: Event) -> Result<InteractionReply, AppError> {
        match event {
            Event::Ping => Ok(InteractionReply::pong()),
            Event::Challenge {
                session_id,
                issuer_id,
                choice,
            } => self.challenge(session_id, issuer_id, choice),
            Event::Accept {
                session_id,
                participant_id,
                token,
                message_id,
            } => Ok(self.accept(session_id, participant_id, token, message_id).await),
            Event::SubmitChoice {
                session_id,
                participant_id,
                choice,
                token,
                message_id,
            } => {
                self.submit_choice(session_id, participant_id, choice, token, message_id)
                    .await
            }
        }
    }

    /// NoSession -> Open: store the challenger's hidden choice and post the
    /// public challenge with its accept affordance.
    fn challenge(
        &self,
        session_id: String,
        issuer_id: String,
        choice: choice::Choice,
    ) -> Result<InteractionReply, AppError> {
        let session = Session::open(
            session_id.clone(),
            Participant::with_choice(issuer_id.clone(), choice),
        );
        self.store.create(session);
        info!(session_id = %session_id, challenger = %issuer_id, "challenge opened");

        let content = format!("A game of chance! <@{issuer_id}> has issued a challenge.");
        Ok(InteractionReply::message(content)
            .with_action_row(vec![Component::accept_button(&session_id)]))
    }

    /// Open -> Open: no store mutation. Retract the public challenge post
    /// and prompt the accepting participant with a freshly shuffled select.
    ///
    /// A stale or replayed accept for a session that no longer exists is
    /// answered with an ephemeral notice instead of a prompt.
    async fn accept(
        &self,
        session_id: String,
        participant_id: String,
        token: String,
        message_id: Option<String>,
    ) -> InteractionReply {
        if self.store.get(&session_id).is_none() {
            info!(session_id = %session_id, participant = %participant_id, "accept for unknown session");
            return InteractionReply::ephemeral("This challenge is no longer active.");
        }

        info!(session_id = %session_id, participant = %participant_id, "challenge accepted");

        if let Some(message_id) = message_id {
            if let Err(err) = self.messenger.delete_message(&token, &message_id).await {
                warn!(session_id = %session_id, error = %err, "failed to retract challenge post");
            }
        }

        let options = choice::shuffled_options(&mut rand::rng());
        InteractionReply::ephemeral("What is your object of choice?")
            .with_action_row(vec![Component::choice_select(&session_id, &options)])
    }

    /// Open -> Resolved -> removed: claim the session, run the result
    /// engine, close out the prompt, then delete the entry.
    ///
    /// A submission for an unknown or already-claimed session is silently
    /// acknowledged; duplicate and late deliveries must not produce a
    /// second result.
    async fn submit_choice(
        &self,
        session_id: String,
        participant_id: String,
        choice: choice::Choice,
        token: String,
        message_id: Option<String>,
    ) -> Result<InteractionReply, AppError> {
        let responder = Participant::with_choice(participant_id, choice);
        let Some(session) = self.store.claim_response(&session_id, responder) else {
            info!(session_id = %session_id, "submission for unknown session dropped");
            return Ok(InteractionReply::deferred_update());
        };

        let resolution = match &session.responder {
            Some(responder) => resolve(&session.challenger, responder)?,
            None => {
                return Err(AppError::internal(format!(
                    "claimed session {session_id} is missing its responder"
                )))
            }
        };

        // The result reply is authoritative; prompt cleanup is best-effort.
        if let Some(message_id) = &message_id {
            if let Err(err) = self
                .messenger
                .edit_message(&token, message_id, PROMPT_CLOSEOUT)
                .await
            {
                warn!(session_id = %session_id, error = %err, "failed to close out choice prompt");
            }
        }

        self.store.remove(&session_id);
        info!(session_id = %session_id, outcome = ?resolution.outcome, "session resolved");

        Ok(InteractionReply::message(resolution.narrative))
    }
}
