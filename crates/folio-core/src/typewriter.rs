//! Character-by-character reveal for the project "AI summary" panel.

pub const UNAVAILABLE_TEXT: &str = "AI Analysis unavailable for this project.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypingState {
    #[default]
    Waiting,
    Typing,
    Done,
}

#[derive(Debug)]
pub struct Typewriter {
    text: String,
    shown: usize, // byte offset, always on a char boundary
    state: TypingState,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        let text = if text.trim().is_empty() {
            UNAVAILABLE_TEXT
        } else {
            text
        };
        Self {
            text: text.to_string(),
            shown: 0,
            state: TypingState::Waiting,
        }
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn is_typing(&self) -> bool {
        self.state == TypingState::Typing
    }

    /// Begin typing. Only the first request counts.
    pub fn start(&mut self) -> bool {
        if self.state != TypingState::Waiting {
            return false;
        }
        self.state = TypingState::Typing;
        true
    }

    /// Reveal the next character. Returns false once typing has finished;
    /// the tick after the last character is the one that finishes.
    pub fn tick(&mut self) -> bool {
        if self.state != TypingState::Typing {
            return false;
        }
        match self.text[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => {
                self.state = TypingState::Done;
                false
            }
        }
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }
}
