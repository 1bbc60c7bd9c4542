// input.rs - Non-blocking quit detection

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Source of the quit signal, polled once per generation.
pub trait Input {
    fn quit_requested(&mut self) -> Result<bool>;
}

/// Reads key presses from the terminal without blocking.
pub struct KeyboardInput {
    quit_key: char,
}

impl KeyboardInput {
    pub fn new(quit_key: char) -> Self {
        Self { quit_key }
    }
}

impl Input for KeyboardInput {
    fn quit_requested(&mut self) -> Result<bool> {
        let mut quit = false;
        // Drain everything queued since the last frame
        while event::poll(Duration::ZERO).context("failed to poll terminal events")? {
            if let Event::Key(key) = event::read().context("failed to read terminal event")? {
                quit |= is_quit(&key, self.quit_key);
            }
        }
        Ok(quit)
    }
}

/// Raw mode swallows SIGINT, so Ctrl-C is treated as quit too.
fn is_quit(key: &KeyEvent, quit_key: char) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char(c) => c == quit_key,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn quit_key_quits() {
        assert!(is_quit(&press(KeyCode::Char('q'), KeyModifiers::NONE), 'q'));
        assert!(!is_quit(&press(KeyCode::Char('Q'), KeyModifiers::SHIFT), 'q'));
        assert!(!is_quit(&press(KeyCode::Char('w'), KeyModifiers::NONE), 'q'));
        assert!(!is_quit(&press(KeyCode::Esc, KeyModifiers::NONE), 'q'));
    }

    #[test]
    fn ctrl_c_quits() {
        assert!(is_quit(&press(KeyCode::Char('c'), KeyModifiers::CONTROL), 'q'));
        assert!(!is_quit(&press(KeyCode::Char('c'), KeyModifiers::NONE), 'q'));
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(!is_quit(&key, 'q'));
    }
}
