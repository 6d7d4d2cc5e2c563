//! Notification rendering

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;

/// Render the notification overlay in the top-right corner of the frame
///
/// Called last so the notification sits on top of everything else.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let (fg, bg, border) = notif.notification_type.colors();

    // message + 2 padding + 2 borders
    let width = u16::try_from(notif.message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let area = popup::top_right(frame.area(), width, 3, MARGIN);

    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(fg).bg(bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
