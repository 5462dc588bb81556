//! HTTP implementation of the notification channel over the platform's
//! webhook endpoints.

use async_trait::async_trait;
use serde_json::json;

use crate::config::settings::Settings;
use crate::errors::domain::DomainError;

use super::messenger::Messenger;

pub struct HttpMessenger {
    client: reqwest::Client,
    api_base: String,
    app_id: String,
}

impl HttpMessenger {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            app_id: settings.app_id.clone(),
        }
    }

    fn message_url(&self, interaction_token: &str, message_id: &str) -> String {
        format!(
            "{}/webhooks/{}/{}/messages/{}",
            self.api_base, self.app_id, interaction_token, message_id
        )
    }
}

#[async_trait]
impl Messenger for HttpMessenger {
    async fn delete_message(
        &self,
        interaction_token: &str,
        message_id: &str,
    ) -> Result<(), DomainError> {
        let url = self.message_url(interaction_token, message_id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| DomainError::delivery(format!("delete {message_id}: {e}")))?;
        response
            .error_for_status()
            .map_err(|e| DomainError::delivery(format!("delete {message_id}: {e}")))?;
        Ok(())
    }

    async fn edit_message(
        &self,
        interaction_token: &str,
        message_id: &str,
        content: &str,
    ) -> Result<(), DomainError> {
        let url = self.message_url(interaction_token, message_id);
        let response = self
            .client
            .patch(&url)
            .json(&json!({ "content": content }))
            .send()
            .await
            .map_err(|e| DomainError::delivery(format!("edit {message_id}: {e}")))?;
        response
            .error_for_status()
            .map_err(|e| DomainError::delivery(format!("edit {message_id}: {e}")))?;
        Ok(())
    }
}
