use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Theme;

/// Request activity shown on the right of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityStatus {
    /// No request is running.
    #[default]
    Idle,
    /// A request is in flight.
    Translating,
}

impl ActivityStatus {
    /// Status for the session loading flag.
    #[must_use]
    pub const fn from_loading(loading: bool) -> Self {
        if loading {
            Self::Translating
        } else {
            Self::Idle
        }
    }

    const fn display_text(self) -> &'static str {
        match self {
            Self::Idle => "READY",
            Self::Translating => "TRANSLATING",
        }
    }

    const fn indicator(self) -> &'static str {
        match self {
            Self::Idle => "●",
            Self::Translating => "◐",
        }
    }
}

/// Styles used by [`HeaderBar`].
pub struct HeaderBarStyle {
    /// App name.
    pub app_name: Style,
    /// Version string.
    pub version: Style,
    /// Status while idle.
    pub status_idle: Style,
    /// Status while translating.
    pub status_busy: Style,
}

impl HeaderBarStyle {
    /// Styles taken from the theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(theme.accent_muted).fg(Color::White),
            status_idle: Style::default()
                .bg(theme.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            status_busy: Style::default()
                .bg(theme.warning)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Top bar with the app name, version and activity status.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    status: ActivityStatus,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Header for `app_name` at `version`.
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            status: ActivityStatus::default(),
            style: HeaderBarStyle::default(),
        }
    }

    /// Activity shown on the right.
    #[must_use]
    pub const fn status(mut self, status: ActivityStatus) -> Self {
        self.status = status;
        self
    }

    /// Overrides the default styles.
    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let name = format!(" {} ", self.app_name.to_uppercase());
        let version = format!(" v{} ", self.version);
        let left_width = u16::try_from(name.width() + 1 + version.width()).unwrap_or(u16::MAX);

        let left_line = Line::from(vec![
            Span::styled(name, self.style.app_name),
            Span::raw(" "),
            Span::styled(version, self.style.version),
        ]);
        Paragraph::new(left_line).render(
            Rect::new(area.x, area.y, left_width.min(area.width), 1),
            buf,
        );

        let status_style = match self.status {
            ActivityStatus::Idle => self.style.status_idle,
            ActivityStatus::Translating => self.style.status_busy,
        };
        let status = format!(
            " {} {} ",
            self.status.indicator(),
            self.status.display_text()
        );
        let status_width = u16::try_from(status.width()).unwrap_or(u16::MAX);

        if status_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(status_width);
            Paragraph::new(Line::from(Span::styled(status, status_style)))
                .render(Rect::new(right_x, area.y, status_width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_row(status: ActivityStatus) -> String {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new("transterm", "0.1.0")
            .status(status)
            .render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_status_from_loading() {
        assert_eq!(ActivityStatus::from_loading(true), ActivityStatus::Translating);
        assert_eq!(ActivityStatus::from_loading(false), ActivityStatus::Idle);
    }

    #[test]
    fn test_header_shows_name_version_and_status() {
        let row = render_row(ActivityStatus::Idle);
        assert!(row.starts_with(" TRANSTERM   v0.1.0 "));
        assert!(row.trim_end().ends_with("● READY"));

        let row = render_row(ActivityStatus::Translating);
        assert!(row.trim_end().ends_with("◐ TRANSLATING"));
    }
}
