use std::sync::Arc;

use vocab_types::{
    AffordanceFlags, CurrentView, Definition, DictionaryResult, Entry, NavCommand, NavState,
    Region, Sense,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStatus {
    /// The selected region has no entries
    Empty,
    Positioned(NavState),
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Back,
    Forward,
}

/// Saturating move within `[0, len - 1]`
fn step(index: usize, len: usize, step: Step) -> usize {
    match step {
        Step::Back => index.saturating_sub(1),
        Step::Forward => (index + 1).min(len.saturating_sub(1)),
    }
}

fn prev_enabled(index: usize) -> bool {
    index > 0
}

fn next_enabled(index: usize, len: usize) -> bool {
    index + 1 < len
}

/// Cursor over the entries of one region: entry, then sense, then example.
///
/// Moving a level resets every level below it, even when the move itself
/// was clamped at a boundary.
#[derive(Debug, Clone)]
pub struct Navigator {
    result: Arc<DictionaryResult>,
    region: Region,
    status: NavStatus,
    audio_available: bool,
}

impl Navigator {
    pub fn new(result: Arc<DictionaryResult>, region: Region, audio_available: bool) -> Self {
        let status = Self::initial_status(&result, region);

        Self {
            result,
            region,
            status,
            audio_available,
        }
    }

    fn initial_status(result: &DictionaryResult, region: Region) -> NavStatus {
        if result.entries(region).is_empty() {
            NavStatus::Empty
        } else {
            NavStatus::Positioned(NavState::default())
        }
    }

    /// Switch region and start over from the first entry
    pub fn select_region(&mut self, region: Region) {
        self.region = region;
        self.status = Self::initial_status(&self.result, region);
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn status(&self) -> NavStatus {
        self.status
    }

    pub fn position(&self) -> Option<NavState> {
        match self.status {
            NavStatus::Empty => None,
            NavStatus::Positioned(state) => Some(state),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        self.result.entries(self.region)
    }

    pub fn result(&self) -> &Arc<DictionaryResult> {
        &self.result
    }

    fn entry_at(&self, state: &NavState) -> Option<&Entry> {
        self.entries().get(state.entry_index)
    }

    fn sense_at(&self, state: &NavState) -> Option<&Sense> {
        self.entry_at(state)?.senses.get(state.sense_index)
    }

    fn definition_at(&self, state: &NavState) -> Option<&Definition> {
        self.sense_at(state)?.first_definition()
    }

    fn senses_len(&self, state: &NavState) -> usize {
        self.entry_at(state).map_or(0, |e| e.senses.len())
    }

    fn examples_len(&self, state: &NavState) -> usize {
        self.definition_at(state).map_or(0, |d| d.examples.len())
    }

    pub fn entry_prev(&mut self) {
        self.move_entry(Step::Back);
    }

    pub fn entry_next(&mut self) {
        self.move_entry(Step::Forward);
    }

    pub fn sense_prev(&mut self) {
        self.move_sense(Step::Back);
    }

    pub fn sense_next(&mut self) {
        self.move_sense(Step::Forward);
    }

    pub fn example_prev(&mut self) {
        self.move_example(Step::Back);
    }

    pub fn example_next(&mut self) {
        self.move_example(Step::Forward);
    }

    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::EntryPrev => self.entry_prev(),
            NavCommand::EntryNext => self.entry_next(),
            NavCommand::SensePrev => self.sense_prev(),
            NavCommand::SenseNext => self.sense_next(),
            NavCommand::ExamplePrev => self.example_prev(),
            NavCommand::ExampleNext => self.example_next(),
        }
    }

    fn move_entry(&mut self, direction: Step) {
        let NavStatus::Positioned(state) = self.status else {
            return;
        };

        self.status = NavStatus::Positioned(NavState {
            entry_index: step(state.entry_index, self.entries().len(), direction),
            sense_index: 0,
            example_index: 0,
        });
    }

    fn move_sense(&mut self, direction: Step) {
        let NavStatus::Positioned(state) = self.status else {
            return;
        };

        let len = self.senses_len(&state);
        if len == 0 {
            return;
        }

        self.status = NavStatus::Positioned(NavState {
            sense_index: step(state.sense_index, len, direction),
            example_index: 0,
            ..state
        });
    }

    fn move_example(&mut self, direction: Step) {
        let NavStatus::Positioned(state) = self.status else {
            return;
        };

        let len = self.examples_len(&state);
        if len == 0 {
            return;
        }

        self.status = NavStatus::Positioned(NavState {
            example_index: step(state.example_index, len, direction),
            ..state
        });
    }

    /// Project the cursor through the result. `None` only when `Empty`.
    pub fn current_view(&self) -> Option<CurrentView> {
        let NavStatus::Positioned(state) = self.status else {
            return None;
        };

        let general_info = self
            .entry_at(&state)
            .map(|e| e.general_info.clone())
            .unwrap_or_default();
        let word_function = self
            .sense_at(&state)
            .map(|s| s.word_function.clone())
            .unwrap_or_default();
        let definition = self.definition_at(&state);

        Some(CurrentView {
            general_info,
            word_function,
            level: definition.map(|d| d.level.clone()).unwrap_or_default(),
            explanation: definition.map(|d| d.explanation.clone()).unwrap_or_default(),
            example_text: definition
                .and_then(|d| d.examples.get(state.example_index))
                .cloned()
                .unwrap_or_default(),
        })
    }

    pub fn affordance_flags(&self) -> AffordanceFlags {
        let speaker_enabled = self.audio_available;

        let NavStatus::Positioned(state) = self.status else {
            return AffordanceFlags {
                speaker_enabled,
                ..AffordanceFlags::default()
            };
        };

        let entries = self.entries().len();
        let senses = self.senses_len(&state);
        let examples = self.examples_len(&state);

        AffordanceFlags {
            entry_prev_enabled: entries > 0 && prev_enabled(state.entry_index),
            entry_next_enabled: next_enabled(state.entry_index, entries),
            sense_prev_enabled: senses > 0 && prev_enabled(state.sense_index),
            sense_next_enabled: next_enabled(state.sense_index, senses),
            example_prev_enabled: examples > 0 && prev_enabled(state.example_index),
            example_next_enabled: next_enabled(state.example_index, examples),
            speaker_enabled,
        }
    }
}
