use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use vocab_core::state::AppState;
use vocab_core::{PhotoBrowser, Session};
use vocab_dictionary::DictionarySource;
use vocab_photos::PhotoSearch;
use vocab_types::{AppEvent, Region, UiEvent};

pub mod accept_card;
pub mod lookup;
pub mod navigate;
pub mod photos;

use accept_card::handle_card_acceptance;
use lookup::{LookupDone, handle_lookup_done, handle_lookup_request};
use navigate::{handle_navigation, handle_region_selection};
use photos::{
    PhotosDone, handle_photo_paging, handle_photo_pick, handle_photo_search, handle_photos_done,
};

/// What the user is working on: the shown lookup, its photos and the pick
pub struct Workspace {
    pub region: Region,
    pub session: Option<Session>,
    pub photos: Option<PhotoBrowser>,
    pub picked_photo: Option<String>,
    /// Photo search whose results are still wanted
    pub photo_search: Option<Uuid>,
}

impl Workspace {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            session: None,
            photos: None,
            picked_photo: None,
            photo_search: None,
        }
    }

    /// Replace the shown lookup; photos belong to the previous word
    pub fn start(&mut self, session: Session) {
        self.session = Some(session);
        self.photos = None;
        self.picked_photo = None;
        self.photo_search = None;
    }
}

/// Collaborators the handlers need besides the workspace
pub struct Services {
    pub state: Arc<AppState>,
    pub dictionary: Arc<dyn DictionarySource>,
    pub photos: Arc<dyn PhotoSearch>,
    pub lookup_done_tx: AsyncSender<LookupDone>,
    pub photos_done_tx: AsyncSender<PhotosDone>,
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    dictionary: Arc<dyn DictionarySource>,
    photos: Arc<dyn PhotoSearch>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let region = state.config.read().await.dictionary.default_region;
    let mut workspace = Workspace::new(region);

    let (lookup_done_tx, lookup_done_rx) = kanal::bounded_async::<LookupDone>(16);
    let (photos_done_tx, photos_done_rx) = kanal::bounded_async::<PhotosDone>(16);
    let services = Services {
        state,
        dictionary,
        photos,
        lookup_done_tx,
        photos_done_tx,
    };

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => {
                let event = event?;
                tracing::debug!("[EVENT_LOOP] Event received: {:?}", std::mem::discriminant(&event));

                if matches!(event, AppEvent::UiEvent(UiEvent::Close)) {
                    tracing::info!("[EVENT_LOOP] Close requested");
                    break;
                }
                handle_events(&services, &mut workspace, &app_to_ui_tx, event).await?;
            }
            done = lookup_done_rx.recv() => {
                let done = done?;
                handle_lookup_done(&services.state, &mut workspace, done, &app_to_ui_tx).await?;
            }
            done = photos_done_rx.recv() => {
                let done = done?;
                handle_photos_done(&mut workspace, done, &app_to_ui_tx).await?;
            }
        }
    }

    Ok(())
}

async fn handle_events(
    services: &Services,
    workspace: &mut Workspace,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::UiEvent(UiEvent::Help) => {
            app_to_ui_tx
                .send(AppEvent::ShowMessage(crate::ui::HELP.to_string()))
                .await?;
        }
        AppEvent::UiEvent(UiEvent::Close) => {}
        AppEvent::Lookup(word) => {
            handle_lookup_request(services, word, app_to_ui_tx).await?;
        }
        AppEvent::Navigate(command) => {
            handle_navigation(workspace, command, app_to_ui_tx).await?;
        }
        AppEvent::SelectRegion(region) => {
            handle_region_selection(workspace, region, app_to_ui_tx).await?;
        }
        AppEvent::SearchPhotos => {
            handle_photo_search(services, workspace, app_to_ui_tx).await?;
        }
        AppEvent::BrowsePhotos { forward } => {
            handle_photo_paging(workspace, forward, app_to_ui_tx).await?;
        }
        AppEvent::PickPhoto(slot) => {
            handle_photo_pick(workspace, slot, app_to_ui_tx).await?;
        }
        AppEvent::AcceptCard => {
            handle_card_acceptance(workspace, app_to_ui_tx).await?;
        }
        AppEvent::ShowView(_)
        | AppEvent::ShowMessage(_)
        | AppEvent::ShowPhotos { .. }
        | AppEvent::CardReady(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}

/// Show the current lookup, with a notice when the region has nothing
pub(crate) async fn send_view(
    session: &Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let display = session.display();
    let empty = display.view.is_none();
    let message = format!(
        "No definition found for '{}' in the {} dictionary",
        display.word, display.region
    );

    app_to_ui_tx.send(AppEvent::ShowView(display)).await?;
    if empty {
        app_to_ui_tx.send(AppEvent::ShowMessage(message)).await?;
    }
    Ok(())
}

pub(crate) async fn send_message(
    app_to_ui_tx: &AsyncSender<AppEvent>,
    message: impl Into<String>,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::ShowMessage(message.into())).await?;
    Ok(())
}
