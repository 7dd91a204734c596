use crate::core::rng::Rng;

/// The fixed word table the game cycles through.
pub const TARGET_WORDS: [&str; 10] = [
    "CAT", "DOG", "RUN", "JUMP", "PLAY", "FAST", "SLOW", "HAPPY", "CODE", "GAME",
];

/// Outcome of shooting a letter against the current word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The letter filled the first open slot.
    Correct,
    /// The letter filled the last open slot, completing the word.
    Completed,
    /// The letter did not match the first open slot; nothing changed.
    Wrong,
}

/// The target word and its partially-filled progress buffer.
///
/// Invariant: `slots.len() == word.len()`. A slot is `Some(letter)` once
/// resolved; the word is complete when no `None` remains. Only the first
/// open slot is ever checked, so spelling is strictly left-to-right and
/// repeated letters need no lookahead.
#[derive(Debug, Clone)]
pub struct WordProgress {
    word: &'static str,
    slots: Vec<Option<char>>,
}

impl WordProgress {
    pub fn new(word: &'static str) -> Self {
        Self {
            word,
            slots: vec![None; word.len()],
        }
    }

    /// Pick a uniformly random word from the table.
    pub fn random(rng: &mut Rng) -> Self {
        Self::new(TARGET_WORDS[rng.next_int(TARGET_WORDS.len() as u32) as usize])
    }

    pub fn word(&self) -> &'static str {
        self.word
    }

    /// Index of the first unresolved slot, or None when complete.
    pub fn first_open_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.first_open_slot().is_none()
    }

    /// Apply a shot letter. Fills the first open slot on a match; a
    /// mismatch (including any shot while already complete) changes
    /// nothing and reports Wrong.
    pub fn apply_shot(&mut self, letter: char) -> ShotOutcome {
        match self.first_open_slot() {
            Some(i) if self.word.as_bytes()[i] as char == letter => {
                self.slots[i] = Some(letter);
                if self.is_complete() {
                    ShotOutcome::Completed
                } else {
                    ShotOutcome::Correct
                }
            }
            _ => ShotOutcome::Wrong,
        }
    }

    /// Progress string for the HUD: resolved letters, '_' placeholders.
    pub fn display(&self) -> String {
        self.slots.iter().map(|s| s.unwrap_or('_')).collect()
    }
}
