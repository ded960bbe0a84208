use kanal::AsyncSender;
use uuid::Uuid;
use vocab_core::PhotoBrowser;
use vocab_types::AppEvent;

use crate::events::{Services, Workspace, send_message};

/// Links gathered by a photo search task, tagged with the request it answers
pub struct PhotosDone {
    pub id: Uuid,
    pub word: String,
    pub per_page: usize,
    pub links: Vec<String>,
}

/// Search the word, then the shown explanation, then the shown example, in the background
pub async fn handle_photo_search(
    services: &Services,
    workspace: &mut Workspace,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (enabled, per_page) = {
        let config = services.state.config.read().await;
        (config.photos.enabled, config.ui.photos_per_page)
    };
    if !enabled {
        return send_message(app_to_ui_tx, "Photo search is disabled").await;
    }

    let Some(session) = workspace.session.as_ref() else {
        return send_message(app_to_ui_tx, "Look up a word before searching photos").await;
    };

    let view = session.navigator().current_view().unwrap_or_default();
    let word = session.word().to_string();
    let queries: Vec<String> = [word.clone(), view.explanation, view.example_text]
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect();

    let id = Uuid::new_v4();
    workspace.photo_search = Some(id);
    tracing::info!("Searching photos for '{word}' ({id})");
    send_message(app_to_ui_tx, format!("Searching photos for '{word}'...")).await?;

    let photos = services.photos.clone();
    let done_tx = services.photos_done_tx.clone();
    tokio::spawn(async move {
        let mut links = Vec::new();
        for query in &queries {
            match photos.search(query).await {
                Ok(mut found) => {
                    tracing::debug!("{} photos for '{query}'", found.len());
                    links.append(&mut found);
                }
                Err(e) => tracing::warn!("Photo search for '{query}' failed: {e}"),
            }
        }

        let done = PhotosDone {
            id,
            word,
            per_page,
            links,
        };
        if let Err(e) = done_tx.send(done).await {
            tracing::error!("Failed to deliver photo results: {e}");
        }
    });

    Ok(())
}

/// Show finished photo results unless a newer search or lookup replaced them
pub async fn handle_photos_done(
    workspace: &mut Workspace,
    done: PhotosDone,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if workspace.photo_search != Some(done.id) {
        tracing::debug!("Discarding stale photos for '{}' ({})", done.word, done.id);
        return Ok(());
    }
    workspace.photo_search = None;

    tracing::info!("Found {} photos for '{}'", done.links.len(), done.word);
    let browser = PhotoBrowser::new(done.links, done.per_page);
    workspace.picked_photo = None;

    if browser.is_empty() {
        workspace.photos = None;
        return send_message(app_to_ui_tx, "No photos found").await;
    }

    send_page(&browser, app_to_ui_tx).await?;
    workspace.photos = Some(browser);
    Ok(())
}

pub async fn handle_photo_paging(
    workspace: &mut Workspace,
    forward: bool,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(browser) = workspace.photos.as_mut() else {
        return send_message(app_to_ui_tx, "No photos to browse, search photos first").await;
    };

    if forward {
        browser.next();
    } else {
        browser.prev();
    }
    send_page(browser, app_to_ui_tx).await
}

/// Keep the photo in `slot` (zero-based) of the shown page for the card
pub async fn handle_photo_pick(
    workspace: &mut Workspace,
    slot: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(browser) = workspace.photos.as_ref() else {
        return send_message(app_to_ui_tx, "No photos to pick from").await;
    };

    match browser.pick(slot) {
        Some(photo) => {
            tracing::debug!("Picked photo {photo}");
            let message = format!("Picked photo {}: {photo}", slot + 1);
            workspace.picked_photo = Some(photo);
            send_message(app_to_ui_tx, message).await
        }
        None => send_message(app_to_ui_tx, format!("No photo in slot {}", slot + 1)).await,
    }
}

async fn send_page(
    browser: &PhotoBrowser,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::ShowPhotos {
            page: browser.page(),
            page_index: browser.page_index(),
            page_count: browser.page_count(),
        })
        .await?;
    Ok(())
}
