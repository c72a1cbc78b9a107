//! Keyboard state for the game screen.
//!
//! Terminals deliver key events rather than key state. [`KeyState`] rebuilds
//! "is Left held?" from them: with release reporting (kitty keyboard protocol)
//! a key stays held until released. Otherwise the first press holds it for
//! [`KEY_FIRST_HOLD_MS`], long enough for auto-repeat to start, and each
//! repeat then holds it for [`KEY_HOLD_MS`].

use crate::constants::{KEY_FIRST_HOLD_MS, KEY_HOLD_MS};
use crate::game::FrameInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// An arrow that is down, as far as the events tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Held {
    /// Time (ms) of the last press or repeat.
    last_ms: u64,
    /// Auto-repeat has started.
    repeating: bool,
}

impl Held {
    fn window_ms(&self) -> u64 {
        if self.repeating {
            KEY_HOLD_MS
        } else {
            KEY_FIRST_HOLD_MS
        }
    }
}

/// Held arrows plus one-shot presses waiting for the next frame.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    release_events: bool,
    left: Option<Held>,
    right: Option<Held>,
    retry: bool,
    escape: bool,
    quit: bool,
}

impl KeyState {
    /// `release_events` says whether the terminal reports key releases.
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            ..Self::default()
        }
    }

    pub fn handle_event(&mut self, event: &Event, now_ms: u64) {
        match event {
            Event::Key(key) => self.handle_key(key, now_ms),
            // Releases are lost while unfocused
            Event::FocusLost => {
                self.left = None;
                self.right = None;
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent, now_ms: u64) {
        if key.kind == KeyEventKind::Release {
            match key.code {
                KeyCode::Left => self.left = None,
                KeyCode::Right => self.right = None,
                _ => {}
            }
            return;
        }

        // Raw mode swallows SIGINT; Ctrl+C is the close signal
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit = true;
            return;
        }

        match key.code {
            KeyCode::Left => self.left = self.pressed(self.left, key.kind, now_ms),
            KeyCode::Right => self.right = self.pressed(self.right, key.kind, now_ms),
            KeyCode::Char('r') | KeyCode::Char('R') => self.retry = true,
            KeyCode::Esc => self.escape = true,
            _ => {}
        }
    }

    /// Without kitty flags auto-repeat arrives as plain presses, so a press
    /// while the key is still held counts as a repeat.
    fn pressed(&self, held: Option<Held>, kind: KeyEventKind, now_ms: u64) -> Option<Held> {
        Some(Held {
            last_ms: now_ms,
            repeating: kind == KeyEventKind::Repeat || self.is_held(held, now_ms),
        })
    }

    fn is_held(&self, held: Option<Held>, now_ms: u64) -> bool {
        match held {
            Some(held) => {
                self.release_events || now_ms.saturating_sub(held.last_ms) <= held.window_ms()
            }
            None => false,
        }
    }

    /// Input for the coming frame. One-shot presses are consumed.
    pub fn take_frame_input(&mut self, now_ms: u64) -> FrameInput {
        FrameInput {
            left: self.is_held(self.left, now_ms),
            right: self.is_held(self.right, now_ms),
            retry: std::mem::take(&mut self.retry),
            escape: std::mem::take(&mut self.escape),
            quit: std::mem::take(&mut self.quit),
        }
    }
}
