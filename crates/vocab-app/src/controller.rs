use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use vocab_core::state::AppState;
use vocab_dictionary::DictionarySource;
use vocab_photos::PhotoSearch;
use vocab_types::AppEvent;

use crate::events::event_loop;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256),
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        dictionary: Arc<dyn DictionarySource>,
        photos: Arc<dyn PhotoSearch>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tracing::info!(
            "Starting with {} and {}",
            dictionary.name(),
            photos.name()
        );

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            dictionary,
            photos,
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Console front end
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    /// Inject an event as if the user had typed it
    pub async fn send(&self, event: AppEvent) -> anyhow::Result<()> {
        self.channels.ui_to_app.0.send(event).await?;
        Ok(())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
