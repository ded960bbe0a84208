use kanal::AsyncSender;
use vocab_types::{AppEvent, NavCommand, Region};

use crate::events::{Workspace, send_message, send_view};

pub async fn handle_navigation(
    workspace: &mut Workspace,
    command: NavCommand,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(session) = workspace.session.as_mut() else {
        return send_message(app_to_ui_tx, "Nothing to browse yet, look up a word first").await;
    };

    session.navigate(command);
    send_view(session, app_to_ui_tx).await
}

/// Switch region; the cursor starts over in the new region
pub async fn handle_region_selection(
    workspace: &mut Workspace,
    region: Region,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    workspace.region = region;

    match workspace.session.as_mut() {
        Some(session) => {
            session.select_region(region);
            send_view(session, app_to_ui_tx).await
        }
        None => send_message(app_to_ui_tx, format!("Region set to {region}")).await,
    }
}
