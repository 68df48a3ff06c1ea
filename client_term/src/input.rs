//! Key mapping from terminal events to game keys, plus held-key tracking

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Key;

/// How long a key counts as held after its last press or auto-repeat, on
/// terminals that never report releases
pub const HOLD_WINDOW: Duration = Duration::from_millis(500);

/// Map a terminal key to a game key
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Key::W,
        KeyCode::Char('s') | KeyCode::Char('S') => Key::S,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char('p') | KeyCode::Char('P') => Key::P,
        KeyCode::Char('o') | KeyCode::Char('O') => Key::O,
        KeyCode::Char('r') | KeyCode::Char('R') => Key::R,
        KeyCode::Char('+') | KeyCode::Char('=') => Key::Plus,
        KeyCode::Char('-') | KeyCode::Char('_') => Key::Minus,
        _ => Key::Other,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Held keys, released either explicitly or after `HOLD_WINDOW` of silence
#[derive(Debug, Default)]
pub struct HeldKeys {
    last_seen: HashMap<Key, Instant>,
    releases: bool,
}

impl HeldKeys {
    pub fn new(releases: bool) -> Self {
        Self {
            last_seen: HashMap::new(),
            releases,
        }
    }

    /// Record a press or auto-repeat
    pub fn press(&mut self, key: Key, at: Instant) {
        if key != Key::Other {
            self.last_seen.insert(key, at);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    pub fn is_held(&self, key: Key, now: Instant) -> bool {
        match self.last_seen.get(&key) {
            Some(_) if self.releases => true,
            Some(at) => now.saturating_duration_since(*at) < HOLD_WINDOW,
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_keys() {
        assert_eq!(map_key(KeyCode::Char('w')), Key::W);
        assert_eq!(map_key(KeyCode::Char('S')), Key::S);
        assert_eq!(map_key(KeyCode::Up), Key::Up);
        assert_eq!(map_key(KeyCode::Down), Key::Down);
    }

    #[test]
    fn test_speed_keys_accept_unshifted_variants() {
        assert_eq!(map_key(KeyCode::Char('=')), Key::Plus);
        assert_eq!(map_key(KeyCode::Char('+')), Key::Plus);
        assert_eq!(map_key(KeyCode::Char('-')), Key::Minus);
        assert_eq!(map_key(KeyCode::Char('x')), Key::Other);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
    }

    #[test]
    fn test_hold_window_expires_without_releases() {
        let start = Instant::now();
        let mut held = HeldKeys::new(false);
        held.press(Key::W, start);
        assert!(held.is_held(Key::W, start + Duration::from_millis(100)));
        assert!(!held.is_held(Key::W, start + HOLD_WINDOW));

        // Auto-repeat refreshes the window
        held.press(Key::W, start + Duration::from_millis(400));
        assert!(held.is_held(Key::W, start + Duration::from_millis(800)));
    }

    #[test]
    fn test_release_events_end_holds() {
        let start = Instant::now();
        let mut held = HeldKeys::new(true);
        held.press(Key::Up, start);
        assert!(held.is_held(Key::Up, start + Duration::from_secs(10)));
        held.release(Key::Up);
        assert!(!held.is_held(Key::Up, start));
    }
}
