use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;
use vocab_config::Config;

#[derive(Default)]
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// The one lookup whose result will be shown; newer requests replace it
    pub active_lookup: RwLock<Option<Uuid>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            active_lookup: RwLock::new(None),
        }
    }

    /// Claim the lookup slot for a new request
    pub async fn begin_lookup(&self) -> Uuid {
        let id = Uuid::new_v4();
        *self.active_lookup.write().await = Some(id);
        tracing::debug!("Active lookup is now {id}");
        id
    }

    /// Release the slot if `id` still holds it; false means the result is stale
    pub async fn finish_lookup(&self, id: Uuid) -> bool {
        let mut active = self.active_lookup.write().await;
        if *active == Some(id) {
            *active = None;
            true
        } else {
            false
        }
    }
}
