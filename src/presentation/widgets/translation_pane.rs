use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Theme;

/// Shown while there is no translation yet.
pub const PLACEHOLDER_TEXT: &str = "Translation will appear here...";
const LOADING_TEXT: &str = "Translating...";

/// Read-only translated text.
pub struct TranslationPane<'a> {
    text: &'a str,
    loading: bool,
    scroll: u16,
    block: Option<Block<'a>>,
    text_style: Style,
    placeholder_style: Style,
}

impl<'a> TranslationPane<'a> {
    /// Pane showing `text`.
    #[must_use]
    pub fn new(text: &'a str, theme: &Theme) -> Self {
        Self {
            text,
            loading: false,
            scroll: 0,
            block: None,
            text_style: theme.text_style,
            placeholder_style: theme.dimmed_style.add_modifier(Modifier::ITALIC),
        }
    }

    /// Shows the loading hint in place of the placeholder.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// First visible row.
    #[must_use]
    pub const fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Surrounding block.
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

/// Number of rows `text` takes when word-wrapped to `width` columns.
#[must_use]
pub fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return text.lines().count();
    }

    text.lines()
        .map(|line| {
            let mut rows = 1;
            let mut current = 0;
            for word in line.split(' ') {
                let word_width = word.width();
                if current > 0 && current + 1 + word_width <= width {
                    current += 1 + word_width;
                    continue;
                }
                if current > 0 {
                    rows += 1;
                }
                // Words wider than the pane are broken across rows.
                rows += word_width.saturating_sub(1) / width;
                current = if word_width == 0 {
                    0
                } else {
                    (word_width - 1) % width + 1
                };
            }
            rows
        })
        .sum()
}

impl Widget for TranslationPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Previous output stays visible while a new request is in flight.
        let paragraph = if self.text.is_empty() {
            let hint = if self.loading {
                LOADING_TEXT
            } else {
                PLACEHOLDER_TEXT
            };
            Paragraph::new(hint).style(self.placeholder_style)
        } else {
            Paragraph::new(self.text)
                .style(self.text_style)
                .scroll((self.scroll, 0))
        };

        let paragraph = paragraph.wrap(Wrap { trim: false });
        match self.block {
            Some(block) => paragraph.block(block).render(area, buf),
            None => paragraph.render(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn first_row(pane: TranslationPane<'_>) -> String {
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);
        pane.render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let theme = Theme::default();
        assert!(first_row(TranslationPane::new("", &theme)).starts_with(PLACEHOLDER_TEXT));
        assert!(first_row(TranslationPane::new("", &theme).loading(true)).starts_with(LOADING_TEXT));
    }

    #[test_case("", 10, 0 ; "empty")]
    #[test_case("hello", 10, 1 ; "fits")]
    #[test_case("hello world", 8, 2 ; "wraps_at_word")]
    #[test_case("a\nb\nc", 10, 3 ; "explicit_lines")]
    #[test_case("abcdefghij", 4, 3 ; "long_word_breaks")]
    #[test_case("你好世界", 4, 2 ; "wide_chars")]
    fn test_wrapped_line_count(text: &str, width: usize, expected: usize) {
        assert_eq!(wrapped_line_count(text, width), expected);
    }

    #[test]
    fn test_renders_text() {
        let theme = Theme::default();
        let row = first_row(TranslationPane::new("bonjour", &theme).loading(true));
        assert!(row.starts_with("bonjour"));
    }
}
