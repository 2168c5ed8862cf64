use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, StatefulWidget, Widget},
};

use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{Pane, Session};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    ActivityStatus, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, LanguageBar,
    LanguageBarStyle, SourceEditor, SourceEditorState, TranslationPane, wrapped_line_count,
};

/// Panes sit side by side from this width on, stacked below it.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 80;
const PAGE_SCROLL: u16 = 10;

/// Work the app loop must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Nothing beyond the state change.
    None,
    /// Start a request for the current source text.
    Translate,
    /// Copy the text of a pane.
    Copy(Pane),
    /// Read the text of a pane aloud.
    Speak(Pane),
    /// Leave the app.
    Quit,
}

/// State of the translator view: the session, the editor and pane focus.
///
/// Layout areas are recorded on every render so mouse clicks can be
/// mapped back to a pane.
pub struct TranslatorScreenState {
    session: Session,
    editor: SourceEditorState,
    focus: Pane,
    translation_scroll: u16,
    theme: Theme,
    keybinds: Vec<Keybind>,
    source_area: Rect,
    translation_area: Rect,
}

impl TranslatorScreenState {
    /// Wraps `session`, loading its source text into the editor.
    #[must_use]
    pub fn new(session: Session, theme: Theme, registry: &CommandRegistry) -> Self {
        let mut editor = SourceEditorState::new();
        editor.set_content(session.source_text());

        Self {
            session,
            editor,
            focus: Pane::Source,
            translation_scroll: 0,
            theme,
            keybinds: registry.keybinds(),
            source_area: Rect::default(),
            translation_area: Rect::default(),
        }
    }

    /// Current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Pane receiving keyboard input.
    #[must_use]
    pub const fn focus(&self) -> Pane {
        self.focus
    }

    /// Theme the view renders with.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Applies a key press to the view.
    ///
    /// Bound commands win over text input. Unbound keys edit the source
    /// when it has focus and scroll the translation otherwise.
    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> ScreenAction {
        match registry.find_action(key) {
            Some(Action::Quit) => ScreenAction::Quit,
            Some(Action::Translate) => ScreenAction::Translate,
            Some(Action::CopyFocused) => ScreenAction::Copy(self.focus),
            Some(Action::SpeakFocused) => ScreenAction::Speak(self.focus),
            Some(Action::SwapLanguages) => {
                self.swap();
                ScreenAction::None
            }
            Some(Action::ClearSource) => {
                self.session.clear_source_text();
                self.editor.clear();
                ScreenAction::None
            }
            Some(Action::FocusNext) => {
                self.focus = self.focus.toggled();
                ScreenAction::None
            }
            Some(
                action @ (Action::NextSourceLanguage
                | Action::PreviousSourceLanguage
                | Action::NextTargetLanguage
                | Action::PreviousTargetLanguage),
            ) => {
                self.cycle_language(action);
                ScreenAction::None
            }
            None => {
                match self.focus {
                    Pane::Source => {
                        if self.editor.handle_key(key) {
                            self.sync_source_text();
                        }
                    }
                    Pane::Translation => self.scroll_translation(key),
                }
                ScreenAction::None
            }
        }
    }

    /// Inserts pasted text when the source pane has focus.
    pub fn handle_paste(&mut self, text: &str) {
        if self.focus == Pane::Source && self.editor.paste(text) {
            self.sync_source_text();
        }
    }

    /// Focuses the pane under a mouse click.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);
        if self.source_area.contains(position) {
            self.focus = Pane::Source;
        } else if self.translation_area.contains(position) {
            self.focus = Pane::Translation;
        }
    }

    /// Stores a finished translation.
    pub fn show_translation(&mut self, text: String) {
        self.session.set_translated_text(text);
        self.translation_scroll = 0;
    }

    /// Expires the copy indicator. Returns `true` when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.expire_copied(now)
    }

    /// Swaps languages and texts. Ignored while a request is in flight so
    /// the pending result lands in the pane it was requested for.
    fn swap(&mut self) {
        if self.session.is_loading() {
            return;
        }
        self.session.swap();
        self.editor.set_content(self.session.source_text());
        self.translation_scroll = 0;
    }

    /// Cycles one side of the pair. Ignored while a request is in flight so
    /// the result keeps the pair it was requested for.
    fn cycle_language(&mut self, action: Action) {
        if self.session.is_loading() {
            return;
        }
        let source = self.session.source_language();
        let target = self.session.target_language();
        match action {
            Action::NextSourceLanguage => self.session.set_source_language(source.next()),
            Action::PreviousSourceLanguage => self.session.set_source_language(source.previous()),
            Action::NextTargetLanguage => self.session.set_target_language(target.next()),
            Action::PreviousTargetLanguage => self.session.set_target_language(target.previous()),
            _ => {}
        }
    }

    fn sync_source_text(&mut self) {
        self.session.set_source_text(self.editor.value());
    }

    fn scroll_translation(&mut self, key: KeyEvent) {
        self.translation_scroll = match key.code {
            KeyCode::Up => self.translation_scroll.saturating_sub(1),
            KeyCode::Down => self.translation_scroll.saturating_add(1),
            KeyCode::PageUp => self.translation_scroll.saturating_sub(PAGE_SCROLL),
            KeyCode::PageDown => self.translation_scroll.saturating_add(PAGE_SCROLL),
            KeyCode::Home => 0,
            _ => self.translation_scroll,
        }
        .min(self.max_translation_scroll());
    }

    /// Last scroll offset that still fills the translation viewport.
    fn max_translation_scroll(&self) -> u16 {
        let inner = Block::default()
            .borders(Borders::ALL)
            .inner(self.translation_area);
        let rows = wrapped_line_count(self.session.translated_text(), usize::from(inner.width));
        u16::try_from(rows.saturating_sub(usize::from(inner.height))).unwrap_or(u16::MAX)
    }

    fn key_hint(&self, action: Action) -> Option<String> {
        self.keybinds
            .iter()
            .find(|k| k.action == action)
            .map(|k| FooterBar::format_key(&k.key))
    }

    fn pane_block(&self, pane: Pane, now: Instant) -> Block<'static> {
        let border_style = if self.focus == pane {
            Style::default().fg(self.theme.accent)
        } else {
            self.theme.dimmed_style
        };

        let language = self.session.language_of(pane);
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::styled(
                format!(" {language} "),
                self.theme.title_style,
            ));

        let status = if self.session.copied_pane(now) == Some(pane) {
            Line::styled(
                " ✓ Copied ",
                Style::default()
                    .fg(self.theme.success)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            let count = self.session.text_of(pane).chars().count();
            Line::styled(format!(" {count} chars "), self.theme.dimmed_style)
        };
        block = block.title(status.right_aligned());

        if pane == Pane::Source {
            let hint = if self.session.is_loading() {
                Line::styled(" Translating... ", self.theme.dimmed_style)
            } else if !self.session.can_translate() {
                Line::styled(
                    " Type text to translate ",
                    self.theme.dimmed_style.add_modifier(Modifier::ITALIC),
                )
            } else if let Some(key) = self.key_hint(Action::Translate) {
                Line::styled(
                    format!(" {key} to translate "),
                    Style::default().fg(self.theme.accent),
                )
            } else {
                Line::default()
            };
            block = block.title_bottom(hint.right_aligned());
        }

        block
    }
}

/// Full-screen translator view.
pub struct TranslatorScreen<'a> {
    app_name: &'a str,
    version: &'a str,
}

impl<'a> TranslatorScreen<'a> {
    /// Screen titled with `app_name` and `version`.
    #[must_use]
    pub const fn new(app_name: &'a str, version: &'a str) -> Self {
        Self { app_name, version }
    }
}

impl StatefulWidget for TranslatorScreen<'_> {
    type State = TranslatorScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let now = Instant::now();
        let theme = state.theme;
        let session = &state.session;

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

        HeaderBar::new(self.app_name, self.version)
            .status(ActivityStatus::from_loading(session.is_loading()))
            .style(HeaderBarStyle::from_theme(&theme))
            .render(rows[0], buf);

        LanguageBar::new(session.source_language(), session.target_language())
            .busy(session.is_loading())
            .style(LanguageBarStyle::from_theme(&theme))
            .render(rows[1], buf);

        let direction = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let panes = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        state.source_area = panes[0];
        state.translation_area = panes[1];
        state.translation_scroll = state
            .translation_scroll
            .min(state.max_translation_scroll());

        let source_block = state.pane_block(Pane::Source, now);
        let translation_block = state.pane_block(Pane::Translation, now);

        SourceEditor::new(&theme)
            .block(source_block)
            .focused(state.focus == Pane::Source)
            .render(panes[0], buf, &mut state.editor);

        TranslationPane::new(state.session.translated_text(), &theme)
            .loading(state.session.is_loading())
            .scroll(state.translation_scroll)
            .block(translation_block)
            .render(panes[1], buf);

        let pair = format!(
            "{} → {} ",
            state.session.source_language().code(),
            state.session.target_language().code()
        );
        FooterBar::new(&state.keybinds)
            .focus(state.focus)
            .right_info(Some(pair.as_str()))
            .style(FooterBarStyle::from_theme(&theme))
            .render(rows[3], buf);
    }
}
