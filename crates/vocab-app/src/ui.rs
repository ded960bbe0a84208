use std::fmt::Write as _;
use std::io::BufRead;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use vocab_types::{AffordanceFlags, AppEvent, DisplayView, NavCommand, Region, UiEvent, VocabCard};

pub const HELP: &str = "\
Commands:
  look <word>                    look a word up
  region <uk|us|business>        switch dictionary region
  entry|sense|example <next|prev>
                                 move through the lookup
  photos                         search photos for the shown definition
  photo <next|prev>              page through photos
  pick <n>                       use photo n of the page on the card
  accept                         hand the shown definition over as a card
  help                           show this list
  quit                           leave";

/// Read stdin on a plain thread so a pending read never holds up shutdown
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded::<String>(16);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {e}");
                    break;
                }
            }
        }
        tracing::debug!("stdin reader stopping");
    });

    rx.to_async()
}

/// Console front end: commands from stdin, rendered events to stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let lines = spawn_stdin_reader();
    println!("Type 'help' for commands.");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.recv() => {
                let Ok(line) = line else {
                    tracing::debug!("stdin closed");
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                    break;
                };

                match parse_command(&line) {
                    Ok(Some(event)) => {
                        let close = matches!(event, AppEvent::UiEvent(UiEvent::Close));
                        ui_to_app_tx.send(event).await?;
                        if close {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(usage) => println!("{usage}"),
                }
            }
            event = app_to_ui_rx.recv() => {
                if let Some(text) = render(&event?) {
                    println!("{text}");
                }
            }
        }
    }

    Ok(())
}

fn direction(arg: Option<&str>, usage: &str) -> Result<bool, String> {
    match arg {
        Some("next") => Ok(true),
        Some("prev") => Ok(false),
        _ => Err(format!("usage: {usage}")),
    }
}

/// One input line to an event; `Ok(None)` for blank lines
pub fn parse_command(line: &str) -> Result<Option<AppEvent>, String> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let arg = Some(rest).filter(|r| !r.is_empty());

    let event = match command.to_lowercase().as_str() {
        "" => return Ok(None),
        "look" | "l" => match arg {
            Some(word) => AppEvent::Lookup(word.to_string()),
            None => return Err("usage: look <word>".to_string()),
        },
        "region" => {
            let region = arg
                .ok_or_else(|| "usage: region <uk|us|business>".to_string())?
                .parse::<Region>()?;
            AppEvent::SelectRegion(region)
        }
        "entry" => AppEvent::Navigate(if direction(arg, "entry <next|prev>")? {
            NavCommand::EntryNext
        } else {
            NavCommand::EntryPrev
        }),
        "sense" => AppEvent::Navigate(if direction(arg, "sense <next|prev>")? {
            NavCommand::SenseNext
        } else {
            NavCommand::SensePrev
        }),
        "example" => AppEvent::Navigate(if direction(arg, "example <next|prev>")? {
            NavCommand::ExampleNext
        } else {
            NavCommand::ExamplePrev
        }),
        "photos" => AppEvent::SearchPhotos,
        "photo" => AppEvent::BrowsePhotos {
            forward: direction(arg, "photo <next|prev>")?,
        },
        "pick" => match arg.and_then(|n| n.parse::<usize>().ok()) {
            Some(n) if n >= 1 => AppEvent::PickPhoto(n - 1),
            _ => return Err("usage: pick <n>, counting from 1".to_string()),
        },
        "accept" => AppEvent::AcceptCard,
        "help" | "?" => AppEvent::UiEvent(UiEvent::Help),
        "quit" | "exit" | "q" => AppEvent::UiEvent(UiEvent::Close),
        other => return Err(format!("Unknown command '{other}', type 'help'")),
    };

    Ok(Some(event))
}

/// Text for events the console shows; backend-bound events render nothing
pub fn render(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::ShowView(display) => Some(render_view(display)),
        AppEvent::ShowMessage(message) => Some(message.clone()),
        AppEvent::ShowPhotos {
            page,
            page_index,
            page_count,
        } => {
            let mut out = format!("Photos, page {}/{}", page_index + 1, page_count);
            for (slot, photo) in page.iter().enumerate() {
                let _ = write!(out, "\n  {}. {}", slot + 1, photo.as_deref().unwrap_or("(none)"));
            }
            Some(out)
        }
        AppEvent::CardReady(card) => Some(render_card(card)),
        _ => None,
    }
}

fn render_view(display: &DisplayView) -> String {
    let mut out = format!("== {} [{}] ==", display.word, display.region);

    let Some(view) = &display.view else {
        out.push_str("\n(no entries)");
        return out;
    };

    let info = &view.general_info;
    let _ = write!(out, "\n{} {}", info.headword, info.part_of_speech);
    if !display.irregular_forms.trim().is_empty() {
        let _ = write!(out, "\n  forms: {}", display.irregular_forms.trim());
    }
    if !view.word_function.is_empty() {
        let _ = write!(out, "\n{}", view.word_function);
    }
    if view.level.is_empty() {
        let _ = write!(out, "\n  {}", view.explanation.trim());
    } else {
        let _ = write!(out, "\n  [{}] {}", view.level, view.explanation.trim());
    }
    if !view.example_text.is_empty() {
        let _ = write!(out, "\n  e.g. {}", view.example_text);
    }
    if !display.translation.is_empty() {
        let _ = write!(out, "\n  translation: {}", display.translation);
    }

    if let Some(position) = display.position {
        let _ = write!(
            out,
            "\nentry {}/{}, sense {}, example {}",
            position.entry_index + 1,
            display.entry_count,
            position.sense_index + 1,
            position.example_index + 1
        );
    }

    let moves = available_moves(&display.flags);
    if !moves.is_empty() {
        let _ = write!(out, "\nmoves: {}", moves.join(", "));
    }
    if display.flags.speaker_enabled {
        out.push_str("\npronunciation available");
    }
    out
}

fn available_moves(flags: &AffordanceFlags) -> Vec<&'static str> {
    [
        (flags.entry_prev_enabled, "entry prev"),
        (flags.entry_next_enabled, "entry next"),
        (flags.sense_prev_enabled, "sense prev"),
        (flags.sense_next_enabled, "sense next"),
        (flags.example_prev_enabled, "example prev"),
        (flags.example_next_enabled, "example next"),
    ]
    .into_iter()
    .filter_map(|(enabled, name)| enabled.then_some(name))
    .collect()
}

fn render_card(card: &VocabCard) -> String {
    let mut out = format!("Card ready: {} ({})", card.word, card.file_stem());
    let _ = write!(out, "\n  definition: {}", card.definition);
    let _ = write!(out, "\n  example: {}", card.example);
    if let Some(photo) = &card.photo {
        let _ = write!(out, "\n  photo: {photo}");
    }
    if let Some(sound) = &card.sound {
        let _ = write!(out, "\n  sound: {} bytes", sound.len());
    }
    out
}
