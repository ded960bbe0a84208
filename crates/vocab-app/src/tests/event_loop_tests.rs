use std::time::Duration;

use vocab_config::Config;
use vocab_types::{AppEvent, Lookup, NavCommand, Region, UiEvent};

use super::stubs::{Harness, StubDictionary, StubPhotos, run_lookup, walk_lookup};

fn dictionary() -> StubDictionary {
    StubDictionary::default()
        .with("run", run_lookup())
        .with("walk", walk_lookup())
}

#[tokio::test]
async fn lookup_shows_first_definition() {
    let harness = Harness::start(dictionary(), StubPhotos::default());

    harness.send(AppEvent::Lookup("  run ".into())).await;
    assert_eq!(harness.next_message().await, "Looking up 'run'...");

    let display = harness.next_view().await;
    let view = display.view.expect("view for a found word");
    assert_eq!(display.word, "run");
    assert_eq!(display.region, Region::Uk);
    assert_eq!(display.entry_count, 2);
    assert_eq!(display.translation, "跑，奔跑");
    assert_eq!(display.irregular_forms.trim(), "running |  ran");
    assert_eq!(view.general_info.headword, "run");
    assert_eq!(view.word_function, "verb (GO QUICKLY)");
    assert_eq!(view.level, "A1");
    assert_eq!(view.example_text, "I can run pretty fast.");

    assert!(display.flags.entry_next_enabled);
    assert!(display.flags.sense_next_enabled);
    assert!(display.flags.example_next_enabled);
    assert!(!display.flags.entry_prev_enabled);
    assert!(display.flags.speaker_enabled);
}

#[tokio::test]
async fn failed_lookup_reports_no_definition() {
    let harness = Harness::start(dictionary(), StubPhotos::default());

    harness.send(AppEvent::Lookup("zzz".into())).await;
    assert!(harness.next_message().await.starts_with("Looking up"));
    assert!(harness.next_message().await.starts_with("Could not fetch 'zzz'"));

    let display = harness.next_view().await;
    assert!(display.view.is_none());
    assert_eq!(display.position, None);
    assert!(!display.flags.any_direction());
    assert_eq!(
        harness.next_message().await,
        "No definition found for 'zzz' in the uk dictionary"
    );
}

#[tokio::test]
async fn blank_lookup_is_refused() {
    let harness = Harness::start(dictionary(), StubPhotos::default());

    harness.send(AppEvent::Lookup("   ".into())).await;
    assert_eq!(harness.next_message().await, "Type a word to look up");
}

#[tokio::test]
async fn newer_lookup_wins() {
    let dictionary = dictionary().delayed("run", Duration::from_millis(300));
    let harness = Harness::start(dictionary, StubPhotos::default());

    harness.send(AppEvent::Lookup("run".into())).await;
    harness.send(AppEvent::Lookup("walk".into())).await;

    let display = harness.next_view().await;
    assert_eq!(display.word, "walk");

    // the slow "run" result arrives later and must be dropped
    let late = harness.drain(Duration::from_millis(600)).await;
    assert!(
        !late.iter().any(|e| matches!(e, AppEvent::ShowView(_))),
        "stale lookup was shown: {late:?}"
    );
}

#[tokio::test]
async fn navigation_moves_and_clamps() {
    let harness = Harness::start(dictionary(), StubPhotos::default());
    harness.send(AppEvent::Lookup("run".into())).await;
    harness.next_view().await;

    harness.send(AppEvent::Navigate(NavCommand::ExampleNext)).await;
    let display = harness.next_view().await;
    assert_eq!(display.view.unwrap().example_text, "She ran home.");
    assert!(!display.flags.example_next_enabled);

    // moving past the last example stays put
    harness.send(AppEvent::Navigate(NavCommand::ExampleNext)).await;
    let display = harness.next_view().await;
    assert_eq!(display.position.unwrap().example_index, 1);

    harness.send(AppEvent::Navigate(NavCommand::SenseNext)).await;
    let display = harness.next_view().await;
    let position = display.position.unwrap();
    assert_eq!(position.sense_index, 1);
    assert_eq!(position.example_index, 0);
    assert_eq!(display.view.unwrap().word_function, "verb (MANAGE)");

    harness.send(AppEvent::Navigate(NavCommand::EntryNext)).await;
    harness.send(AppEvent::Navigate(NavCommand::EntryPrev)).await;
    harness.next_view().await;
    let display = harness.next_view().await;
    let position = display.position.unwrap();
    assert_eq!((position.entry_index, position.sense_index, position.example_index), (0, 0, 0));
}

#[tokio::test]
async fn navigation_before_lookup_is_a_notice() {
    let harness = Harness::start(dictionary(), StubPhotos::default());

    harness.send(AppEvent::Navigate(NavCommand::EntryNext)).await;
    assert!(harness.next_message().await.starts_with("Nothing to browse yet"));
}

#[tokio::test]
async fn region_switch_restarts_the_cursor() {
    let harness = Harness::start(dictionary(), StubPhotos::default());
    harness.send(AppEvent::Lookup("run".into())).await;
    harness.next_view().await;

    harness.send(AppEvent::Navigate(NavCommand::SenseNext)).await;
    harness.next_view().await;

    harness.send(AppEvent::SelectRegion(Region::Us)).await;
    let display = harness.next_view().await;
    assert_eq!(display.region, Region::Us);
    assert_eq!(display.entry_count, 1);
    assert_eq!(display.view.unwrap().word_function, "verb (MOVE FAST)");

    harness.send(AppEvent::SelectRegion(Region::Business)).await;
    let display = harness.next_view().await;
    assert!(display.view.is_none());
    assert_eq!(
        harness.next_message().await,
        "No definition found for 'run' in the business dictionary"
    );

    // the chosen region sticks for the next lookup
    harness.send(AppEvent::Lookup("walk".into())).await;
    let display = harness.next_view().await;
    assert_eq!(display.region, Region::Business);
}

#[tokio::test]
async fn configured_region_is_used_first() {
    let mut config = Config::default();
    config.dictionary.default_region = Region::Us;
    let harness = Harness::start_with(config, dictionary(), StubPhotos::default());

    harness.send(AppEvent::Lookup("run".into())).await;
    let display = harness.next_view().await;
    assert_eq!(display.region, Region::Us);
    assert_eq!(display.view.unwrap().explanation, "to go faster than walk");
}

#[tokio::test]
async fn photos_are_searched_paged_and_picked() {
    let photos = StubPhotos::default()
        .with("run", &["https://p/1.jpg", "https://p/2.jpg"])
        .with("to move along, faster than walking", &["https://p/3.jpg"]);
    // no canned photos for the example: that search fails and adds nothing
    let harness = Harness::start(dictionary(), photos);

    harness.send(AppEvent::Lookup("run".into())).await;
    harness.next_view().await;

    harness.send(AppEvent::SearchPhotos).await;
    assert_eq!(harness.next_message().await, "Searching photos for 'run'...");
    let (page, page_index, page_count) = harness.next_photos().await;
    assert_eq!(page, vec![Some("https://p/1.jpg".to_string()), Some("https://p/2.jpg".to_string())]);
    assert_eq!(page_index, 0);
    assert_eq!(page_count, 2);

    harness.send(AppEvent::BrowsePhotos { forward: true }).await;
    harness.send(AppEvent::BrowsePhotos { forward: true }).await;
    harness.next_photos().await;
    let (page, page_index, _) = harness.next_photos().await;
    assert_eq!(page, vec![Some("https://p/3.jpg".to_string()), None]);
    assert_eq!(page_index, 1);

    harness.send(AppEvent::PickPhoto(1)).await;
    assert_eq!(harness.next_message().await, "No photo in slot 2");

    harness.send(AppEvent::PickPhoto(0)).await;
    assert_eq!(harness.next_message().await, "Picked photo 1: https://p/3.jpg");

    harness.send(AppEvent::AcceptCard).await;
    match harness.next_event().await {
        AppEvent::CardReady(card) => {
            assert_eq!(card.word, "run");
            assert_eq!(card.definition, "to move along, faster than walking");
            assert_eq!(card.example, "I can run pretty fast.");
            assert_eq!(card.photo.as_deref(), Some("https://p/3.jpg"));
            assert_eq!(card.sound.as_deref(), Some(&b"ID3run"[..]));
        }
        other => panic!("Wrong event type: {other:?}"),
    }
}

#[tokio::test]
async fn photo_search_without_results_or_lookup() {
    let harness = Harness::start(dictionary(), StubPhotos::default());

    harness.send(AppEvent::SearchPhotos).await;
    assert_eq!(harness.next_message().await, "Look up a word before searching photos");

    harness.send(AppEvent::Lookup("walk".into())).await;
    harness.next_view().await;
    harness.send(AppEvent::SearchPhotos).await;
    assert!(harness.next_message().await.starts_with("Searching photos"));
    assert_eq!(harness.next_message().await, "No photos found");

    harness.send(AppEvent::BrowsePhotos { forward: true }).await;
    assert!(harness.next_message().await.starts_with("No photos to browse"));
}

#[tokio::test]
async fn disabled_photo_search() {
    let mut config = Config::default();
    config.photos.enabled = false;
    let harness = Harness::start_with(config, dictionary(), StubPhotos::default());

    harness.send(AppEvent::Lookup("walk".into())).await;
    harness.next_view().await;
    harness.send(AppEvent::SearchPhotos).await;
    assert_eq!(harness.next_message().await, "Photo search is disabled");
}

#[tokio::test]
async fn card_without_photo_or_sound() {
    let harness = Harness::start(dictionary(), StubPhotos::default());

    harness.send(AppEvent::AcceptCard).await;
    assert!(harness.next_message().await.starts_with("Nothing to save"));

    harness.send(AppEvent::Lookup("walk".into())).await;
    harness.next_view().await;
    harness.send(AppEvent::AcceptCard).await;
    match harness.next_event().await {
        AppEvent::CardReady(card) => {
            assert_eq!(card.word, "walk");
            assert_eq!(card.file_stem(), "walk");
            assert_eq!(card.photo, None);
            assert_eq!(card.sound, None);
        }
        other => panic!("Wrong event type: {other:?}"),
    }
}

#[tokio::test]
async fn card_for_word_without_entries_is_refused() {
    let nothing = Lookup {
        word: "zzzq".into(),
        ..Lookup::default()
    };
    let harness = Harness::start(dictionary().with("zzzq", nothing), StubPhotos::default());

    harness.send(AppEvent::Lookup("zzzq".into())).await;
    harness.next_view().await;
    assert_eq!(
        harness.next_message().await,
        "No definition found for 'zzzq' in the uk dictionary"
    );

    harness.send(AppEvent::AcceptCard).await;
    assert_eq!(harness.next_message().await, "Card is empty, nothing to save");
}

#[tokio::test]
async fn card_for_failed_lookup_is_refused() {
    let harness = Harness::start(dictionary(), StubPhotos::default());

    harness.send(AppEvent::Lookup("zzzq".into())).await;
    harness.next_view().await;
    assert!(harness.next_message().await.starts_with("No definition found"));

    harness.send(AppEvent::AcceptCard).await;
    let events = harness.drain(Duration::from_millis(200)).await;
    assert!(
        !events.iter().any(|e| matches!(e, AppEvent::CardReady(_))),
        "card handed over without a definition: {events:?}"
    );
    assert!(events.iter().any(
        |e| matches!(e, AppEvent::ShowMessage(m) if m == "Card is empty, nothing to save")
    ));
}

#[tokio::test]
async fn slow_photo_search_does_not_block_navigation() {
    let photos = StubPhotos::default()
        .with("run", &["https://p/1.jpg"])
        .delayed("run", Duration::from_millis(300));
    let harness = Harness::start(dictionary(), photos);

    harness.send(AppEvent::Lookup("run".into())).await;
    harness.next_view().await;

    harness.send(AppEvent::SearchPhotos).await;
    assert!(harness.next_message().await.starts_with("Searching photos"));

    // answered while the search is still sleeping
    harness.send(AppEvent::Navigate(NavCommand::SenseNext)).await;
    let display = harness.next_view().await;
    assert_eq!(display.position.unwrap().sense_index, 1);

    let (page, _, page_count) = harness.next_photos().await;
    assert_eq!(page, vec![Some("https://p/1.jpg".to_string()), None]);
    assert_eq!(page_count, 1);
}

#[tokio::test]
async fn photos_for_a_replaced_lookup_are_dropped() {
    let photos = StubPhotos::default()
        .with("run", &["https://p/1.jpg"])
        .delayed("run", Duration::from_millis(300));
    let harness = Harness::start(dictionary(), photos);

    harness.send(AppEvent::Lookup("run".into())).await;
    harness.next_view().await;
    harness.send(AppEvent::SearchPhotos).await;
    assert!(harness.next_message().await.starts_with("Searching photos"));

    harness.send(AppEvent::Lookup("walk".into())).await;
    assert_eq!(harness.next_view().await.word, "walk");

    let late = harness.drain(Duration::from_millis(600)).await;
    assert!(
        !late.iter().any(|e| matches!(e, AppEvent::ShowPhotos { .. })),
        "photos of the previous word were shown: {late:?}"
    );

    harness.send(AppEvent::PickPhoto(0)).await;
    assert_eq!(harness.next_message().await, "No photos to pick from");
}

#[tokio::test]
async fn help_and_close() {
    let harness = Harness::start(dictionary(), StubPhotos::default());

    harness.send(AppEvent::UiEvent(UiEvent::Help)).await;
    assert!(harness.next_message().await.contains("look <word>"));

    harness.send(AppEvent::UiEvent(UiEvent::Close)).await;
    let result = tokio::time::timeout(Duration::from_secs(2), harness.task)
        .await
        .expect("event loop did not stop");
    assert!(result.unwrap().is_ok());
}

#[tokio::test]
async fn cancellation_stops_the_loop() {
    let harness = Harness::start(dictionary(), StubPhotos::default());

    harness.cancel.cancel();
    let result = tokio::time::timeout(Duration::from_secs(2), harness.task)
        .await
        .expect("event loop did not stop");
    assert!(result.unwrap().is_ok());
}
