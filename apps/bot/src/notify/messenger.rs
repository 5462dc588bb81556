use async_trait::async_trait;

use crate::errors::domain::DomainError;

/// Boundary to the platform's follow-up message API.
///
/// Both operations are best-effort cleanup of earlier output: failures are
/// reported so callers can log them, but never roll back a session
/// mutation that already happened.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Delete a previously sent message (retract a challenge post).
    async fn delete_message(
        &self,
        interaction_token: &str,
        message_id: &str,
    ) -> Result<(), DomainError>;

    /// Edit a previously sent message (close out the ephemeral prompt).
    async fn edit_message(
        &self,
        interaction_token: &str,
        message_id: &str,
        content: &str,
    ) -> Result<(), DomainError>;
}
