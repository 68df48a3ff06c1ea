//! Input vocabulary shared by the games and the platform backends

use glam::Vec2;

/// Keys the games react to. Backends map anything else to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Space,
    Escape,
    P,
    O,
    R,
    Plus,
    Minus,
    Other,
}

/// Discrete events drained from the platform once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    /// Primary pointer button pressed at screen coordinates
    PointerDown(Vec2),
}

/// Event queue plus held-key query
pub trait Input {
    /// Drain every event that arrived since the previous call
    fn poll_events(&mut self) -> anyhow::Result<Vec<InputEvent>>;

    /// Whether `key` is currently held down
    fn is_held(&self, key: Key) -> bool;
}
