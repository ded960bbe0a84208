pub mod model;
pub mod types;

pub use model::{Definition, DictionaryResult, Entry, GeneralInfo, Region, Sense};
pub use types::{
    AffordanceFlags, AppEvent, CurrentView, DisplayView, Lookup, NavCommand, NavState,
    PronunciationAudio, UiEvent, VocabCard,
};
