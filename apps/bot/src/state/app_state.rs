use std::sync::Arc;

use crate::config::settings::Settings;
use crate::notify::Messenger;
use crate::services::duels::DuelFlow;
use crate::store::sessions::SessionStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// The in-memory session store; the only mutable shared state.
    pub store: Arc<SessionStore>,
    /// Outbound notification channel.
    pub messenger: Arc<dyn Messenger>,
    /// Environment-derived settings.
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings, messenger: Arc<dyn Messenger>) -> Self {
        Self {
            store: Arc::new(SessionStore::new()),
            messenger,
            settings,
        }
    }

    /// Lifecycle controller handle for one request; cheap to build.
    pub fn flow(&self) -> DuelFlow {
        DuelFlow::new(Arc::clone(&self.store), Arc::clone(&self.messenger))
    }
}
