use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::Language;
use crate::presentation::theme::Theme;

const SWAP_SYMBOL: &str = " ⇄ ";

/// Styles used by [`LanguageBar`].
pub struct LanguageBarStyle {
    /// Language names.
    pub selector: Style,
    /// Swap marker.
    pub swap: Style,
    /// Swap marker while a request is in flight.
    pub swap_disabled: Style,
}

impl LanguageBarStyle {
    /// Styles taken from the theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            selector: Style::default()
                .bg(theme.accent_muted)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            swap: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            swap_disabled: theme.dimmed_style,
        }
    }
}

/// Source selector, swap control and target selector on one row.
pub struct LanguageBar {
    source: Language,
    target: Language,
    busy: bool,
    style: LanguageBarStyle,
}

impl LanguageBar {
    /// Bar for the `source` to `target` pair.
    #[must_use]
    pub fn new(source: Language, target: Language) -> Self {
        Self {
            source,
            target,
            busy: false,
            style: LanguageBarStyle::from_theme(&Theme::default()),
        }
    }

    /// Dims the swap control while a request is in flight.
    #[must_use]
    pub const fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    /// Overrides the default styles.
    #[must_use]
    pub const fn style(mut self, style: LanguageBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for LanguageBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let swap_style = if self.busy {
            self.style.swap_disabled
        } else {
            self.style.swap
        };

        let line = Line::from(vec![
            Span::styled(format!(" ◂ {} ▸ ", self.source.name()), self.style.selector),
            Span::raw("  "),
            Span::styled(SWAP_SYMBOL, swap_style),
            Span::raw("  "),
            Span::styled(format!(" ◂ {} ▸ ", self.target.name()), self.style.selector),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_both_languages_around_swap() {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        let en = Language::find("en").unwrap();
        let fr = Language::find("fr").unwrap();

        LanguageBar::new(en, fr).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        let en_pos = row.find("English").unwrap();
        let swap_pos = row.find('⇄').unwrap();
        let fr_pos = row.find("Français").unwrap();
        assert!(en_pos < swap_pos && swap_pos < fr_pos);
    }
}
