use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, StatefulWidget, Widget},
};
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthChar;

use crate::presentation::theme::Theme;

/// Shown while the editor is empty.
pub const PLACEHOLDER_TEXT: &str = "Enter text to translate...";

/// Editable multi-line source text.
pub struct SourceEditorState {
    textarea: TextArea<'static>,
    scroll_offset: usize,
}

impl Default for SourceEditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceEditorState {
    /// Empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            scroll_offset: 0,
        }
    }

    /// Editor content with lines joined by `\n`.
    #[must_use]
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// `true` when the editor holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(String::is_empty)
    }

    /// Replaces the whole content and leaves the cursor at its end.
    pub fn set_content(&mut self, content: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(content);
        self.scroll_offset = 0;
    }

    /// Removes all text.
    pub fn clear(&mut self) {
        self.set_content("");
    }

    /// Inserts pasted text at the cursor. Returns `true` if content changed.
    pub fn paste(&mut self, text: &str) -> bool {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.textarea.insert_str(normalized)
    }

    /// Applies an editing key. Returns `true` if the content changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let word = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('w' | 'h') if key.modifiers == KeyModifiers::CONTROL => {
                self.textarea.delete_word()
            }
            KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => {
                self.textarea.delete_line_by_head()
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.textarea.insert_char(c);
                true
            }
            KeyCode::Enter if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                self.textarea.insert_newline();
                true
            }
            KeyCode::Backspace if word => self.textarea.delete_word(),
            KeyCode::Backspace => self.textarea.delete_char(),
            KeyCode::Delete if word => self.textarea.delete_next_word(),
            KeyCode::Delete => self.textarea.delete_next_char(),
            code => {
                let movement = match code {
                    KeyCode::Left if word => Some(CursorMove::WordBack),
                    KeyCode::Right if word => Some(CursorMove::WordForward),
                    KeyCode::Left => Some(CursorMove::Back),
                    KeyCode::Right => Some(CursorMove::Forward),
                    KeyCode::Up => Some(CursorMove::Up),
                    KeyCode::Down => Some(CursorMove::Down),
                    KeyCode::Home if word => Some(CursorMove::Top),
                    KeyCode::End if word => Some(CursorMove::Bottom),
                    KeyCode::Home => Some(CursorMove::Head),
                    KeyCode::End => Some(CursorMove::End),
                    _ => None,
                };
                if let Some(movement) = movement {
                    self.textarea.move_cursor(movement);
                }
                false
            }
        }
    }

    /// Soft-wraps the content to `width` columns.
    ///
    /// Returns the visual rows and the cursor position in visual coordinates.
    fn visual_lines(&self, width: usize) -> (Vec<String>, usize, usize) {
        let (cursor_row, cursor_col) = self.textarea.cursor();
        let mut rows = Vec::new();
        let mut cursor = (0, 0);

        for (i, line) in self.textarea.lines().iter().enumerate() {
            let on_cursor_line = i == cursor_row;
            let mut current = String::new();
            let mut current_width = 0;

            for (j, ch) in line.chars().enumerate() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                if on_cursor_line && j == cursor_col {
                    cursor = (rows.len(), current_width);
                }
                current.push(ch);
                current_width += ch_width;
            }

            if on_cursor_line && cursor_col >= line.chars().count() {
                if current_width >= width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    cursor = (rows.len(), 0);
                } else {
                    cursor = (rows.len(), current_width);
                }
            }
            rows.push(current);
        }

        (rows, cursor.0, cursor.1)
    }
}

/// Styles used by [`SourceEditor`].
pub struct SourceEditorStyle {
    /// Editor text.
    pub text_style: Style,
    /// Placeholder shown while empty.
    pub placeholder_style: Style,
    /// Cell under the cursor while focused.
    pub cursor_style: Style,
}

impl SourceEditorStyle {
    /// Styles taken from the theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            text_style: theme.text_style,
            placeholder_style: theme.dimmed_style.add_modifier(Modifier::ITALIC),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Renders [`SourceEditorState`] by hand; tui-textarea's own widget targets
/// an older ratatui.
pub struct SourceEditor<'a> {
    block: Option<Block<'a>>,
    focused: bool,
    style: SourceEditorStyle,
}

impl<'a> SourceEditor<'a> {
    /// Editor widget styled from `theme`.
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        Self {
            block: None,
            focused: false,
            style: SourceEditorStyle::from_theme(theme),
        }
    }

    /// Surrounding block.
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Draws the cursor when set.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn put_str(buf: &mut Buffer, x: u16, y: u16, max_width: usize, text: &str, style: Style) {
        let mut used = 0;
        for ch in text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > max_width {
                break;
            }
            let cell_x = x.saturating_add(u16::try_from(used).unwrap_or(u16::MAX));
            if let Some(cell) = buf.cell_mut((cell_x, y)) {
                cell.set_char(ch).set_style(style);
            }
            used += ch_width;
        }
    }
}

impl StatefulWidget for SourceEditor<'_> {
    type State = SourceEditorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        let width = usize::from(inner.width);
        let height = usize::from(inner.height);
        if width == 0 || height == 0 {
            return;
        }

        if state.is_empty() {
            Self::put_str(
                buf,
                inner.x,
                inner.y,
                width,
                PLACEHOLDER_TEXT,
                self.style.placeholder_style,
            );
            if self.focused
                && let Some(cell) = buf.cell_mut((inner.x, inner.y))
            {
                cell.set_style(self.style.cursor_style);
            }
            return;
        }

        let (rows, cursor_row, cursor_col) = state.visual_lines(width);

        if cursor_row >= state.scroll_offset + height {
            state.scroll_offset = cursor_row + 1 - height;
        } else if cursor_row < state.scroll_offset {
            state.scroll_offset = cursor_row;
        }

        for (i, row) in rows.iter().enumerate().skip(state.scroll_offset).take(height) {
            let y = inner.y + u16::try_from(i - state.scroll_offset).unwrap_or(0);
            Self::put_str(buf, inner.x, y, width, row, self.style.text_style);

            if self.focused && i == cursor_row {
                let x = inner.x + u16::try_from(cursor_col).unwrap_or(u16::MAX);
                if x < inner.right()
                    && let Some(cell) = buf.cell_mut((x, y))
                {
                    cell.set_style(self.style.cursor_style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(state: &mut SourceEditorState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_newline() {
        let mut state = SourceEditorState::new();
        type_str(&mut state, "hi");
        assert!(state.handle_key(key(KeyCode::Enter)));
        type_str(&mut state, "there");
        assert_eq!(state.value(), "hi\nthere");
    }

    #[test]
    fn test_cursor_keys_do_not_change_content() {
        let mut state = SourceEditorState::new();
        type_str(&mut state, "abc");
        assert!(!state.handle_key(key(KeyCode::Left)));
        assert!(!state.handle_key(key(KeyCode::Home)));
        assert!(state.handle_key(key(KeyCode::Delete)));
        assert_eq!(state.value(), "bc");
    }

    #[test]
    fn test_control_chords_are_not_inserted() {
        let mut state = SourceEditorState::new();
        assert!(!state.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)));
        assert!(state.is_empty());
    }

    #[test]
    fn test_backspace_with_multibyte_chars() {
        let mut state = SourceEditorState::new();
        type_str(&mut state, "你好");
        assert!(state.handle_key(key(KeyCode::Backspace)));
        assert_eq!(state.value(), "你");
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut state = SourceEditorState::new();
        type_str(&mut state, "hello world");
        state.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(state.value(), "hello ");
    }

    #[test]
    fn test_set_content_and_clear() {
        let mut state = SourceEditorState::new();
        state.set_content("line one\nline two");
        assert_eq!(state.value(), "line one\nline two");
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.value(), "");
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut state = SourceEditorState::new();
        assert!(state.paste("a\r\nb"));
        assert_eq!(state.value(), "a\nb");
    }

    #[test]
    fn test_wide_characters_wrap_by_width() {
        let mut state = SourceEditorState::new();
        state.set_content("你好世界");
        let (rows, cursor_row, cursor_col) = state.visual_lines(5);
        assert_eq!(rows, vec!["你好", "世界"]);
        assert_eq!((cursor_row, cursor_col), (1, 4));
    }

    #[test]
    fn test_cursor_at_full_row_moves_to_next_row() {
        let mut state = SourceEditorState::new();
        state.set_content("abcd");
        let (rows, cursor_row, cursor_col) = state.visual_lines(4);
        assert_eq!(rows, vec!["abcd", ""]);
        assert_eq!((cursor_row, cursor_col), (1, 0));
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        let mut state = SourceEditorState::new();

        SourceEditor::new(&Theme::default()).render(area, &mut buf, &mut state);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.starts_with(PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        let mut state = SourceEditorState::new();
        state.set_content("one\ntwo\nthree");

        SourceEditor::new(&Theme::default())
            .focused(true)
            .render(area, &mut buf, &mut state);

        let last: String = (0..5).map(|x| buf[(x, 1)].symbol()).collect();
        assert_eq!(last, "three");
    }
}
