use kanal::AsyncSender;
use uuid::Uuid;
use vocab_core::Session;
use vocab_core::state::AppState;
use vocab_dictionary::FetchError;
use vocab_types::{AppEvent, Lookup};

use crate::events::{Services, Workspace, send_message, send_view};

/// Outcome of a lookup task, tagged with the request it answers
pub struct LookupDone {
    pub id: Uuid,
    pub word: String,
    pub result: Result<Lookup, FetchError>,
}

/// Claim the lookup slot and fetch in the background
pub async fn handle_lookup_request(
    services: &Services,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = word.trim().to_string();
    if word.is_empty() {
        return send_message(app_to_ui_tx, "Type a word to look up").await;
    }

    let id = services.state.begin_lookup().await;
    tracing::info!("Looking up '{word}' ({id})");
    send_message(app_to_ui_tx, format!("Looking up '{word}'...")).await?;

    let dictionary = services.dictionary.clone();
    let done_tx = services.lookup_done_tx.clone();
    tokio::spawn(async move {
        let result = dictionary.lookup(&word).await;
        if let Err(e) = done_tx.send(LookupDone { id, word, result }).await {
            tracing::error!("Failed to deliver lookup result: {e}");
        }
    });

    Ok(())
}

/// Show a finished lookup unless a newer request replaced it
pub async fn handle_lookup_done(
    state: &AppState,
    workspace: &mut Workspace,
    done: LookupDone,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !state.finish_lookup(done.id).await {
        tracing::debug!("Discarding stale lookup of '{}' ({})", done.word, done.id);
        return Ok(());
    }

    let lookup = match done.result {
        Ok(lookup) => lookup,
        Err(e) => {
            tracing::warn!("Lookup of '{}' failed: {e}", done.word);
            send_message(app_to_ui_tx, format!("Could not fetch '{}': {e}", done.word)).await?;
            Lookup {
                word: done.word,
                ..Lookup::default()
            }
        }
    };

    tracing::debug!(
        "Lookup of '{}' done, translation: '{}', audio available: {}",
        lookup.word,
        lookup.translation,
        lookup.audio.is_available()
    );

    workspace.start(Session::new(lookup, workspace.region));
    match workspace.session.as_ref() {
        Some(session) => send_view(session, app_to_ui_tx).await,
        None => Ok(()),
    }
}
