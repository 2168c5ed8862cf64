//! Terminal event classification.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

/// Outcome of handling one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Exit,
}

/// Whether a key event should be acted on.
///
/// Terminals with the kitty protocol also report releases, which must not
/// type a character twice.
#[must_use]
pub fn is_key_press(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
}

/// Cell position of a left click, if the event is one.
#[must_use]
pub fn left_click_position(mouse: &MouseEvent) -> Option<(u16, u16)> {
    matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
        .then_some((mouse.column, mouse.row))
}
