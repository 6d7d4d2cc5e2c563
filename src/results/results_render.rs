use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, Focus};
use crate::catalog::ComicRecord;
use crate::stats::StatField;
use crate::theme;

/// Render the comic list with the selected comic's thumbnail URL in the footer
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::ResultsPane {
        theme::results::BORDER_FOCUSED
    } else {
        theme::results::BORDER_UNFOCUSED
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" Comics ({}/{}) ", app.visible.len(), app.comics.len()))
        .border_style(Style::default().fg(border_color));

    if let Some(url) = app
        .selected_comic()
        .map(|c| c.thumbnail_url.as_str())
        .filter(|url| !url.is_empty())
    {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", url),
            Style::default().fg(theme::results::THUMBNAIL),
        )));
    }

    let inner = block.inner(area);
    app.results.update_viewport(inner.height);

    if app.visible.is_empty() {
        let message = if app.is_loading() {
            "Loading comics..."
        } else if app.comics.is_empty() {
            "No comics loaded"
        } else {
            "No comics match the current filters"
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(theme::results::EMPTY),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let field = app.stats.field();
    let selected = app.results.selected;
    let width = inner.width as usize;

    let items: Vec<ListItem> = app
        .visible_comics()
        .enumerate()
        .skip(app.results.offset)
        .take(inner.height as usize)
        .map(|(idx, comic)| ListItem::new(comic_row(comic, field, width, idx == selected)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// `title [type] ........ value field`, padded to `width`
fn comic_row(comic: &ComicRecord, field: StatField, width: usize, selected: bool) -> Line<'static> {
    let value = format!("{} {} ", field.value(comic), field);
    let kind = if comic.comic_type.is_empty() {
        String::new()
    } else {
        format!(" [{}]", comic.comic_type)
    };

    let fixed = 1 + kind.chars().count() + 1 + value.chars().count();
    let title_room = width.saturating_sub(fixed);
    let title: String = if comic.title.chars().count() > title_room {
        let cut: String = comic.title.chars().take(title_room.saturating_sub(1)).collect();
        format!("{}…", cut)
    } else {
        comic.title.clone()
    };
    let used = 1 + title.chars().count() + kind.chars().count() + value.chars().count();
    let padding = " ".repeat(width.saturating_sub(used));

    let base = if selected {
        Style::default()
            .fg(theme::results::ITEM_SELECTED_FG)
            .bg(theme::results::ITEM_SELECTED_BG)
            .add_modifier(theme::results::ITEM_SELECTED_MODIFIER)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!(" {}", title), base.fg(theme::results::TITLE)),
        Span::styled(kind, base.fg(theme::results::TYPE)),
        Span::styled(padding, base),
        Span::styled(value, base.fg(theme::results::FIELD_VALUE)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{record, sample_comics, test_app};
    use insta::assert_snapshot;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_pane(app, f, f.area())).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn snapshot_results_pane() {
        let mut app = test_app(sample_comics());
        let output = render(&mut app, 60, 8);
        assert_snapshot!(output);
    }

    #[test]
    fn snapshot_results_no_matches() {
        let mut app = test_app(sample_comics());
        app.set_title_filter("no such comic");
        let output = render(&mut app, 60, 5);
        assert_snapshot!(output);
    }

    #[test]
    fn test_footer_follows_selection() {
        let mut app = test_app(sample_comics());
        app.results.select_next();
        let output = render(&mut app, 80, 10);
        assert!(output.contains("http://i.annihil.us/u/prod/marvel/i/mg/2.jpg"));
    }

    #[test]
    fn test_filtered_count_in_title() {
        let mut app = test_app(sample_comics());
        app.set_type_filter(Some("comic".to_string()));
        let output = render(&mut app, 80, 10);
        assert!(output.contains("Comics (2/4)"));
    }

    #[test]
    fn test_empty_collection_message() {
        let mut app = test_app(Vec::new());
        let output = render(&mut app, 80, 10);
        assert!(output.contains("No comics loaded"));
    }

    #[test]
    fn test_row_truncates_long_title() {
        let comic = record(1, "An Extremely Long Omnibus Title That Cannot Fit", "comic", 12, &[]);
        let line = comic_row(&comic, StatField::CharacterCount, 40, false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.chars().count(), 40);
        assert!(text.contains('…'));
        assert!(text.ends_with("12 characters "));
    }

    #[test]
    fn test_viewport_follows_pane_height() {
        let mut app = test_app(sample_comics());
        render(&mut app, 80, 6);
        assert_eq!(app.results.viewport_height, 4);
    }
}
