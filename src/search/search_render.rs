use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, Focus};
use crate::theme;

pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Search box followed by the character and type dropdowns
pub fn render_filter_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    let [search_area, character_area, type_area] = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Percentage(30),
        Constraint::Percentage(25),
    ])
    .areas(area);

    render_search_box(app, frame, search_area);
    render_dropdown(
        frame,
        character_area,
        " Character ",
        "F2",
        app.criteria.character_name.as_deref(),
    );
    render_dropdown(
        frame,
        type_area,
        " Type ",
        "F3",
        app.criteria.comic_type.as_deref(),
    );
}

fn render_search_box(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::SearchField;
    let border_color = if focused {
        theme::filter_bar::BORDER_FOCUSED
    } else if !app.criteria.title_substring.is_empty() {
        theme::filter_bar::BORDER_ACTIVE_FILTER
    } else {
        theme::filter_bar::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Search ")
        .border_style(Style::default().fg(border_color));

    let textarea = app.search.textarea_mut();
    textarea.set_block(block);
    textarea.set_style(Style::default().fg(theme::filter_bar::TEXT));
    textarea.set_placeholder_style(Style::default().fg(theme::filter_bar::PLACEHOLDER));
    textarea.set_cursor_style(if focused {
        theme::palette::CURSOR
    } else {
        Style::default()
    });

    frame.render_widget(&*textarea, area);
}

/// Closed dropdown: current selection (or "Any") and the key that opens it
fn render_dropdown(frame: &mut Frame, area: Rect, title: &str, key: &str, value: Option<&str>) {
    let border_color = if value.is_some() {
        theme::filter_bar::BORDER_ACTIVE_FILTER
    } else {
        theme::filter_bar::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} ", key),
                Style::default().fg(theme::filter_bar::KEY_HINT),
            ))
            .right_aligned(),
        )
        .border_style(Style::default().fg(border_color));

    let text = match value {
        Some(v) => Span::styled(format!("{} ▾", v), Style::default().fg(theme::filter_bar::TEXT)),
        None => Span::styled("Any ▾", Style::default().fg(theme::filter_bar::PLACEHOLDER)),
    };

    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}
