//! Typing effect state machine.
//!
//! The animator types a phrase one character at a time, pauses, deletes it,
//! pauses again and moves on to the next phrase, forever. Each call to
//! [`TypingAnimator::step`] performs one character change and returns the
//! text to render together with the delay before the next step. The host
//! owns the timer.

use crate::config::{DELETE_DELAY_MS, PAUSE_EMPTY_MS, PAUSE_FULL_MS, PHRASES, TYPE_DELAY_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingDelays {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_full_ms: u32,
    pub pause_empty_ms: u32,
}

impl Default for TypingDelays {
    fn default() -> Self {
        Self {
            type_ms: TYPE_DELAY_MS,
            delete_ms: DELETE_DELAY_MS,
            pause_full_ms: PAUSE_FULL_MS,
            pause_empty_ms: PAUSE_EMPTY_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    delays: TypingDelays,
    phrase: usize,
    chars: usize,
    direction: Direction,
}

impl TypingAnimator {
    /// Returns `None` when there is nothing to type.
    pub fn new<I, S>(phrases: I, delays: TypingDelays) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            delays,
            phrase: 0,
            chars: 0,
            direction: Direction::Forward,
        })
    }

    pub fn site_default() -> Option<Self> {
        Self::new(PHRASES.iter().copied(), TypingDelays::default())
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn char_count(&self) -> usize {
        self.chars
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn delays(&self) -> TypingDelays {
        self.delays
    }

    pub fn step(&mut self) -> TypingStep {
        let phrase_len = self.phrases[self.phrase].chars().count();
        let delay_ms = match self.direction {
            Direction::Forward => {
                self.chars = (self.chars + 1).min(phrase_len);
                if self.chars == phrase_len {
                    self.direction = Direction::Backward;
                    self.delays.pause_full_ms
                } else {
                    self.delays.type_ms
                }
            }
            Direction::Backward => {
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.direction = Direction::Forward;
                    self.delays.pause_empty_ms
                } else {
                    self.delays.delete_ms
                }
            }
        };
        let text = prefix(&self.phrases[self.phrase], self.chars).to_string();
        if self.direction == Direction::Forward && self.chars == 0 {
            self.phrase = (self.phrase + 1) % self.phrases.len();
        }
        TypingStep { text, delay_ms }
    }
}

fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
