use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::Pane;
use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;

/// Styles used by [`FooterBar`].
pub struct FooterBarStyle {
    /// Binding labels.
    pub label_style: Style,
    /// Key names.
    pub key_style: Style,
    /// Right-aligned info text.
    pub info: Style,
    /// Focused pane marker.
    pub focus_indicator: Style,
}

impl FooterBarStyle {
    /// Styles taken from the theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(theme.accent_muted).fg(Color::White),
            info: theme.dimmed_style,
            focus_indicator: Style::default()
                .bg(theme.accent_muted)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Bottom bar listing the visible key bindings.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    focus: Option<Pane>,
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Footer listing `keybindings` marked visible.
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            focus: None,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    /// Pane named by the focus indicator.
    #[must_use]
    pub const fn focus(mut self, pane: Pane) -> Self {
        self.focus = Some(pane);
        self
    }

    /// Text pinned to the right edge.
    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    /// Overrides the default styles.
    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Short key label, e.g. `C-t` or `A-Enter`.
    pub fn format_key(key: &KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }
        // Shift is already visible in the character's case.
        if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
            s.push_str("S-");
        }

        match key.code {
            KeyCode::Char(' ') => s.push_str("Space"),
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::BackTab => s.push_str("BackTab"),
            KeyCode::Backspace => s.push_str("Bksp"),
            KeyCode::F(n) => {
                let _ = write!(s, "F{n}");
            }
            other => {
                let _ = write!(s, "{other:?}");
            }
        }
        s
    }

    fn build_left_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();

        if let Some(pane) = self.focus {
            let name = match pane {
                Pane::Source => "SOURCE",
                Pane::Translation => "TRANSLATION",
            };
            spans.push(Span::styled(format!(" {name} "), self.style.focus_indicator));
            spans.push(Span::raw(" "));
        }

        for (i, binding) in self
            .keybindings
            .iter()
            .filter(|k| k.visible_in_bar)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let right_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.width()).unwrap_or(u16::MAX));
        let left_width = area.width.saturating_sub(right_width.saturating_add(1));

        Paragraph::new(Line::from(self.build_left_spans()))
            .render(Rect::new(area.x, area.y, left_width, 1), buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            Paragraph::new(Line::from(Span::styled(info, self.style.info)))
                .render(Rect::new(right_x, area.y, right_width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;
    use test_case::test_case;

    #[test_case(KeyCode::Char('t'), KeyModifiers::CONTROL, "C-t" ; "ctrl_char")]
    #[test_case(KeyCode::Enter, KeyModifiers::ALT, "A-Enter" ; "alt_enter")]
    #[test_case(KeyCode::Char('S'), KeyModifiers::ALT.union(KeyModifiers::SHIFT), "A-S" ; "shifted_char")]
    #[test_case(KeyCode::Tab, KeyModifiers::SHIFT, "S-Tab" ; "shift_tab")]
    #[test_case(KeyCode::F(5), KeyModifiers::NONE, "F5" ; "function_key")]
    fn test_format_key(code: KeyCode, modifiers: KeyModifiers, expected: &str) {
        assert_eq!(FooterBar::format_key(&KeyEvent::new(code, modifiers)), expected);
    }

    #[test]
    fn test_renders_labels_and_keys() {
        let binds = [Keybind::new(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
            Action::Translate,
            "Translate",
        )];
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&binds)
            .focus(Pane::Source)
            .right_info(Some("en → zh"))
            .render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.starts_with(" SOURCE "));
        assert!(row.contains(" Translate "));
        assert!(row.contains(" C-t "));
        assert!(row.trim_end().ends_with("zh"));
    }
}
