use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{DictionaryResult, GeneralInfo, Region};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Look a word up online
    Lookup(String),
    Navigate(NavCommand),
    SelectRegion(Region),
    /// Search photos for the word, explanation and example on screen
    SearchPhotos,
    BrowsePhotos {
        forward: bool,
    },
    PickPhoto(usize),
    AcceptCard,
    ShowView(DisplayView),
    ShowMessage(String),
    ShowPhotos {
        page: Vec<Option<String>>,
        page_index: usize,
        page_count: usize,
    },
    CardReady(VocabCard),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Help,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    EntryPrev,
    EntryNext,
    SensePrev,
    SenseNext,
    ExamplePrev,
    ExampleNext,
}

/// Cursor position over entries, senses and examples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub entry_index: usize,
    pub sense_index: usize,
    pub example_index: usize,
}

/// What the cursor currently addresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentView {
    pub general_info: GeneralInfo,
    pub word_function: String,
    pub level: String,
    pub explanation: String,
    pub example_text: String,
}

/// Which navigation steps are currently meaningful
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordanceFlags {
    pub entry_prev_enabled: bool,
    pub entry_next_enabled: bool,
    pub sense_prev_enabled: bool,
    pub sense_next_enabled: bool,
    pub example_prev_enabled: bool,
    pub example_next_enabled: bool,
    pub speaker_enabled: bool,
}

impl AffordanceFlags {
    pub fn any_direction(&self) -> bool {
        self.entry_prev_enabled
            || self.entry_next_enabled
            || self.sense_prev_enabled
            || self.sense_next_enabled
            || self.example_prev_enabled
            || self.example_next_enabled
    }
}

/// Flattened screen state sent to the front end
#[derive(Debug, Clone, Default)]
pub struct DisplayView {
    pub word: String,
    pub region: Region,
    pub view: Option<CurrentView>,
    /// Irregular forms with their grammatical labels removed
    pub irregular_forms: String,
    pub translation: String,
    pub position: Option<NavState>,
    pub entry_count: usize,
    pub flags: AffordanceFlags,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PronunciationAudio {
    /// The page had no British pronunciation
    #[default]
    Missing,
    Loaded(Vec<u8>),
    /// The page referenced audio but fetching it failed
    Unavailable(String),
}

impl PronunciationAudio {
    pub fn is_available(&self) -> bool {
        matches!(self, PronunciationAudio::Loaded(bytes) if !bytes.is_empty())
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            PronunciationAudio::Loaded(bytes) if !bytes.is_empty() => Some(bytes),
            _ => None,
        }
    }
}

/// A completed lookup of one word
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    pub word: String,
    pub result: Arc<DictionaryResult>,
    pub translation: String,
    pub audio: PronunciationAudio,
}

/// Record offered to vocabulary storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabCard {
    pub word: String,
    pub definition: String,
    pub example: String,
    pub photo: Option<String>,
    pub sound: Option<Vec<u8>>,
}

impl VocabCard {
    pub fn new(
        word: &str,
        definition: &str,
        example: &str,
        photo: Option<String>,
        sound: Option<Vec<u8>>,
    ) -> Self {
        // "run ( verb )" style labels keep only the headword
        let word = word.split('(').next().unwrap_or_default().trim().to_string();

        Self {
            word,
            definition: definition.trim().to_string(),
            example: example.trim().to_string(),
            photo: photo.filter(|p| !p.trim().is_empty()),
            sound: sound.filter(|s| !s.is_empty()),
        }
    }

    /// Storage rejects cards with nothing to save
    pub fn is_blank(&self) -> bool {
        self.word.is_empty()
            && self.definition.is_empty()
            && self.example.is_empty()
            && self.photo.is_none()
    }

    /// Base name for the card's image and sound files
    pub fn file_stem(&self) -> String {
        self.word.trim().replace([' ', '/'], "_").to_lowercase()
    }
}
