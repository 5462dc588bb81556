//! Result engine: pure resolution of a completed session.

use super::choice::{beats, Outcome};
use super::session::Participant;
use crate::errors::domain::DomainError;

/// Outcome from the challenger's perspective, plus the public summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub narrative: String,
}

/// Resolve a game between two participants.
///
/// Both participants must carry a choice; a missing one is a programming
/// error in the caller, not a recoverable game condition.
pub fn resolve(challenger: &Participant, responder: &Participant) -> Result<Resolution, DomainError> {
    let a = challenger.choice.ok_or_else(|| {
        DomainError::invalid_choice(format!("challenger {} has no choice set", challenger.id))
    })?;
    let b = responder.choice.ok_or_else(|| {
        DomainError::invalid_choice(format!("responder {} has no choice set", responder.id))
    })?;

    let outcome = beats(a, b);
    let narrative = match outcome {
        Outcome::Win => format!(
            "<@{}>'s {} {} <@{}>'s {}. <@{}> wins!",
            challenger.id,
            a.label(),
            a.takedown(b),
            responder.id,
            b.label(),
            challenger.id,
        ),
        Outcome::Lose => format!(
            "<@{}>'s {} {} <@{}>'s {}. <@{}> wins!",
            responder.id,
            b.label(),
            b.takedown(a),
            challenger.id,
            a.label(),
            responder.id,
        ),
        Outcome::Tie => format!(
            "<@{}> and <@{}> both chose {}. It's a tie!",
            challenger.id,
            responder.id,
            a.label(),
        ),
    };

    Ok(Resolution { outcome, narrative })
}
