use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use super::PickerState;
use crate::theme;
use crate::widgets::popup;

const SEARCH_HEIGHT: u16 = 3;
const MAX_VISIBLE_ENTRIES: u16 = 12;
const POPUP_WIDTH: u16 = 50;

/// Render the open picker as a centered popup
pub fn render_popup(picker: &mut PickerState, frame: &mut Frame) {
    let no_matches = picker.filtered_count() == 0 && !picker.query().is_empty();
    // "No matches" takes a row of its own
    let entry_count = u16::try_from(picker.filtered_count())
        .unwrap_or(u16::MAX)
        .saturating_add(1)
        .saturating_add(u16::from(no_matches));
    let list_height = entry_count.min(MAX_VISIBLE_ENTRIES) + 2;
    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, list_height + SEARCH_HEIGHT);

    popup::clear_area(frame, area);

    let [list_area, search_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(SEARCH_HEIGHT)]).areas(area);

    picker
        .selection
        .update_viewport(list_area.height.saturating_sub(2));

    let title = format!(
        " {} ({}/{}) ",
        picker.kind().title(),
        picker.filtered_count(),
        picker.total_count()
    );
    let max_text_len = (list_area.width as usize).saturating_sub(6);
    let selected = picker.selection.selected;
    let offset = picker.selection.offset;
    let visible = picker.selection.viewport_height as usize;

    let mut items: Vec<ListItem> = picker
        .entries()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, label)| {
            let text = truncate(label, max_text_len);
            let line = if idx == selected {
                Span::styled(
                    format!(" ► {} ", text),
                    Style::default()
                        .fg(theme::picker::ITEM_SELECTED_FG)
                        .bg(theme::picker::ITEM_SELECTED_BG)
                        .add_modifier(theme::picker::ITEM_SELECTED_MODIFIER),
                )
            } else if idx == 0 {
                Span::styled(format!("   {} ", text), Style::default().fg(theme::picker::ITEM_ANY))
            } else {
                Span::styled(
                    format!("   {} ", text),
                    Style::default().fg(theme::picker::ITEM_NORMAL),
                )
            };
            ListItem::new(Line::from(line))
        })
        .collect();

    if no_matches {
        items.push(ListItem::new(Line::from(Span::styled(
            "   No matches",
            Style::default().fg(theme::picker::NO_MATCHES),
        ))));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(theme::picker::BORDER))
        .style(Style::default().bg(theme::picker::BACKGROUND));
    frame.render_widget(List::new(items).block(block), list_area);

    let search_textarea = picker.search_textarea_mut();
    search_textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Filter ")
            .border_style(Style::default().fg(theme::picker::SEARCH_BORDER))
            .style(Style::default().bg(theme::picker::BACKGROUND)),
    );
    frame.render_widget(&*search_textarea, search_area);
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let truncated: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    } else {
        text.to_string()
    }
}
