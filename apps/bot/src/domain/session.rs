//! Session and participant records.

use time::OffsetDateTime;

use super::choice::Choice;

/// One player's stake in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Platform-scoped user identifier.
    pub id: String,
    /// The participant's pick, unset until submitted.
    pub choice: Option<Choice>,
}

impl Participant {
    pub fn with_choice(id: impl Into<String>, choice: Choice) -> Self {
        Self {
            id: id.into(),
            choice: Some(choice),
        }
    }
}

/// One in-progress challenge, keyed by the interaction id that created it.
///
/// A session is `Open` while `responder` is unset. Filling the responder
/// slot claims the session for resolution; the store entry is deleted as
/// soon as the result has been produced.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub challenger: Participant,
    pub responder: Option<Participant>,
    /// Creation stamp, used only by the TTL sweep.
    pub created_at: OffsetDateTime,
}

impl Session {
    /// Open a fresh session with the challenger's hidden choice fixed.
    pub fn open(id: impl Into<String>, challenger: Participant) -> Self {
        Self {
            id: id.into(),
            challenger,
            responder: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Still awaiting a responder?
    pub fn is_open(&self) -> bool {
        self.responder.is_none()
    }
}
