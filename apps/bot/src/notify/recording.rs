//! Recording test double for the notification channel.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::errors::domain::DomainError;

use super::messenger::Messenger;

/// Records every delivery instruction instead of performing it. Optionally
/// fails the next call to exercise the delivery-error path.
#[derive(Default)]
pub struct RecordingMessenger {
    deletes: Mutex<Vec<(String, String)>>,
    edits: Mutex<Vec<(String, String, String)>>,
    fail_next: AtomicBool,
}

impl RecordingMessenger {
    pub fn deletes(&self) -> Vec<(String, String)> {
        self.deletes.lock().clone()
    }

    pub fn edits(&self) -> Vec<(String, String, String)> {
        self.edits.lock().clone()
    }

    /// Make the next delivery call fail with a `DomainError::Delivery`.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn take_failure(&self) -> Result<(), DomainError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(DomainError::delivery("injected delivery failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn delete_message(
        &self,
        interaction_token: &str,
        message_id: &str,
    ) -> Result<(), DomainError> {
        self.take_failure()?;
        self.deletes
            .lock()
            .push((interaction_token.to_string(), message_id.to_string()));
        Ok(())
    }

    async fn edit_message(
        &self,
        interaction_token: &str,
        message_id: &str,
        content: &str,
    ) -> Result<(), DomainError> {
        self.take_failure()?;
        self.edits.lock().push((
            interaction_token.to_string(),
            message_id.to_string(),
            content.to_string(),
        ));
        Ok(())
    }
}
