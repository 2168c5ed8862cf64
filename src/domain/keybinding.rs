use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Commands a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Leave the app.
    Quit,
    /// Translate the source text.
    Translate,
    /// Swap languages and texts.
    SwapLanguages,
    /// Empty the source pane.
    ClearSource,

    // Pane actions
    /// Move focus to the other pane.
    FocusNext,
    /// Copy the focused pane.
    CopyFocused,
    /// Read the focused pane aloud.
    SpeakFocused,

    // Language selection
    /// Cycle the source language forward.
    NextSourceLanguage,
    /// Cycle the source language backward.
    PreviousSourceLanguage,
    /// Cycle the target language forward.
    NextTargetLanguage,
    /// Cycle the target language backward.
    PreviousTargetLanguage,
}

/// A key bound to a command, with its footer label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Key combination.
    pub key: KeyEvent,
    /// Command it triggers.
    pub action: Action,
    /// Footer label.
    pub label: Cow<'static, str>,
    /// Listed in the footer.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Binding shown in the footer.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }
}

/// Parses a key description such as `Ctrl+t`, `Alt+Enter` or `F5`.
///
/// Modifier names are case-insensitive. Uppercase letters imply `Shift`,
/// matching what terminals report.
#[must_use]
pub fn parse_key(input: &str) -> Option<KeyEvent> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // A literal '+' key is written as the final segment after a separator.
    let (modifier_part, key_part) = match input.rfind('+') {
        Some(idx) if idx == input.len() - 1 => (input[..idx].trim_end_matches('+'), "+"),
        Some(idx) => (&input[..idx], &input[idx + 1..]),
        None => ("", input),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_part.split('+').filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_part.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bksp" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        lower => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let mut chars = key_part.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if c.is_ascii_uppercase() {
                    modifiers |= KeyModifiers::SHIFT;
                }
                KeyCode::Char(c)
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}
