use vocab_types::{DisplayView, Lookup, NavCommand, Region, VocabCard};

use crate::navigation::Navigator;
use crate::preprocess::strip_inflection_labels;

/// A finished lookup together with the cursor the user moves over it
#[derive(Debug, Clone)]
pub struct Session {
    lookup: Lookup,
    navigator: Navigator,
}

impl Session {
    pub fn new(lookup: Lookup, region: Region) -> Self {
        let navigator = Navigator::new(lookup.result.clone(), region, lookup.audio.is_available());

        Self { lookup, navigator }
    }

    pub fn word(&self) -> &str {
        &self.lookup.word
    }

    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Nothing to show for the selected region
    pub fn is_empty(&self) -> bool {
        self.navigator.entries().is_empty()
    }

    pub fn select_region(&mut self, region: Region) {
        tracing::debug!("Switching region to {region}");
        self.navigator.select_region(region);
    }

    pub fn navigate(&mut self, command: NavCommand) {
        self.navigator.apply(command);
        tracing::debug!("{:?} -> {:?}", command, self.navigator.status());
    }

    pub fn display(&self) -> DisplayView {
        let view = self.navigator.current_view();
        let irregular_forms = view
            .as_ref()
            .map(|v| strip_inflection_labels(&v.general_info.irregular_forms))
            .unwrap_or_default();

        DisplayView {
            word: self.lookup.word.clone(),
            region: self.navigator.region(),
            view,
            irregular_forms,
            translation: self.lookup.translation.clone(),
            position: self.navigator.position(),
            entry_count: self.navigator.entries().len(),
            flags: self.navigator.affordance_flags(),
        }
    }

    /// Card for what is on screen, with the photo the user picked.
    /// The word is the shown headword, so an empty region gives a blank card.
    pub fn card(&self, photo: Option<String>) -> VocabCard {
        let view = self.navigator.current_view().unwrap_or_default();

        VocabCard::new(
            &view.general_info.headword,
            &view.explanation,
            &view.example_text,
            photo,
            self.lookup.audio.bytes().map(<[u8]>::to_vec),
        )
    }
}
