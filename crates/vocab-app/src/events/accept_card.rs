use kanal::AsyncSender;
use vocab_types::AppEvent;

use crate::events::{Workspace, send_message};

/// Hand the shown definition over as a card; blank cards are refused
pub async fn handle_card_acceptance(
    workspace: &mut Workspace,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(session) = workspace.session.as_ref() else {
        return send_message(app_to_ui_tx, "Nothing to save, look up a word first").await;
    };

    let card = session.card(workspace.picked_photo.clone());
    if card.is_blank() {
        tracing::warn!("Refusing blank card for '{}'", session.word());
        return send_message(app_to_ui_tx, "Card is empty, nothing to save").await;
    }

    tracing::info!(
        "Card ready: '{}' as {} (photo: {}, sound: {})",
        card.word,
        card.file_stem(),
        card.photo.is_some(),
        card.sound.is_some()
    );
    app_to_ui_tx.send(AppEvent::CardReady(card)).await?;

    workspace.picked_photo = None;
    Ok(())
}
