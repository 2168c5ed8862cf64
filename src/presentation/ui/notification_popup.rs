use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 60;
const MAX_HEIGHT: u16 = 10;

/// Toast drawn in the top-right corner over the screen.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    /// Popup for one toast.
    #[must_use]
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let title_width = self.notification.title.width() + 2;
        let message_width = self.notification.message.width();

        let width = u16::try_from(message_width.max(title_width))
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(MAX_WIDTH.min(area.width.saturating_sub(2)));

        let inner_width = usize::from(width.saturating_sub(2).max(1));
        let lines = u16::try_from(message_width.div_ceil(inner_width).max(1)).unwrap_or(u16::MAX);
        let height = lines.saturating_add(2).min(MAX_HEIGHT);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let y = area.y + 2;
        area.intersection(Rect::new(x, y, width, height))
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        if popup.area() == 0 {
            return;
        }

        let color = match self.notification.level {
            NotificationLevel::Info => self.theme.accent,
            NotificationLevel::Success => self.theme.success,
            NotificationLevel::Warn => self.theme.warning,
            NotificationLevel::Error => self.theme.error,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.notification.title))
            .style(Style::default().fg(color));

        let para = Paragraph::new(self.notification.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(popup, buf);
        para.render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_stays_inside_area() {
        let notification = Notification::new(
            NotificationLevel::Error,
            "Error",
            "Translation failed. Please try again.".repeat(5),
        );
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 12);

        let popup = NotificationPopup::new(&notification, &theme).popup_area(area);

        assert!(popup.right() <= area.right());
        assert!(popup.bottom() <= area.bottom());
        assert!(popup.height <= MAX_HEIGHT);
    }

    #[test]
    fn test_renders_message() {
        let notification = Notification::new(NotificationLevel::Success, "Done", "Translated");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);

        NotificationPopup::new(&notification, &theme).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Translated"));
        assert!(text.contains("Done"));
    }
}
