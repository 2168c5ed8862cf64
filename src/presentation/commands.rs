use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::domain::keybinding::{Action, Keybind, parse_key};

/// Actions shown in the footer, in display order.
const FOOTER_ACTIONS: [(Action, &str); 6] = [
    (Action::Translate, "Translate"),
    (Action::SwapLanguages, "Swap"),
    (Action::FocusNext, "Focus"),
    (Action::CopyFocused, "Copy"),
    (Action::SpeakFocused, "Speak"),
    (Action::Quit, "Quit"),
];

/// Key bindings for every command, with the ones shown in the footer kept apart.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self {
            display_bindings: HashMap::new(),
            input_bindings: Vec::new(),
        };

        let ctrl = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        let alt = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT);
        let alt_shift = |c: char| {
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT | KeyModifiers::SHIFT)
        };

        registry.register(Action::Quit, ctrl('c'), true);
        registry.register(Action::Quit, ctrl('q'), false);
        registry.register(Action::Translate, ctrl('t'), true);
        registry.register(
            Action::Translate,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT),
            false,
        );
        registry.register(Action::SwapLanguages, ctrl('s'), true);
        registry.register(Action::ClearSource, ctrl('l'), true);
        registry.register(
            Action::FocusNext,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );
        registry.register(Action::CopyFocused, ctrl('y'), true);
        registry.register(Action::SpeakFocused, ctrl('p'), true);

        registry.register(Action::NextSourceLanguage, alt('s'), true);
        registry.register(Action::PreviousSourceLanguage, alt_shift('S'), true);
        registry.register(Action::NextTargetLanguage, alt('t'), true);
        registry.register(Action::PreviousTargetLanguage, alt_shift('T'), true);

        registry
    }
}

impl CommandRegistry {
    /// Registry with the default bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default registry, then applies user bindings.
    ///
    /// Each entry maps a key description such as `"Ctrl+Enter"` to an action.
    /// A user binding becomes the displayed key for its action and shadows any
    /// default bound to the same key. Unparseable keys are logged and skipped.
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();

        let mut entries: Vec<_> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (key_str, action) in entries {
            match parse_key(key_str) {
                Some(key) => {
                    registry
                        .input_bindings
                        .retain(|(k, _)| !Self::same_key(k, &key));
                    registry.register(*action, key, true);
                }
                None => warn!(key = %key_str, ?action, "Ignoring invalid keybinding"),
            }
        }

        registry
    }

    fn register(&mut self, action: Action, key: KeyEvent, is_primary: bool) {
        if is_primary {
            self.display_bindings.insert(action, key);
        }
        // Later registrations take precedence.
        self.input_bindings.insert(0, (key, action));
    }

    fn same_key(a: &KeyEvent, b: &KeyEvent) -> bool {
        a.code == b.code && a.modifiers == b.modifiers
    }

    /// Primary key for `action`.
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    /// Resolves a key press to its command, if bound.
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| Self::same_key(k, &key))
            .map(|(_, a)| *a)
    }

    /// Key hints for the footer bar.
    pub fn keybinds(&self) -> Vec<Keybind> {
        FOOTER_ACTIONS
            .iter()
            .filter_map(|(action, label)| {
                self.get(*action)
                    .map(|key| Keybind::new(key, *action, *label))
            })
            .collect()
    }
}
