use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::theme;

/// Border plus one row per summary line
pub const STATS_CARD_HEIGHT: u16 = 6;

/// Stats card, or a loading placeholder while the catalog is in flight
pub fn render_card(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(" Comic Stats ", theme::header::TITLE))
        .title_bottom(
            Line::from(Span::styled(
                format!(" F4: {} ", app.stats.field()),
                Style::default().fg(theme::header::FIELD_HINT),
            ))
            .right_aligned(),
        )
        .border_style(Style::default().fg(theme::header::BORDER));

    let lines: Vec<Line> = if app.is_loading() {
        vec![Line::from(Span::styled(
            " Loading...",
            Style::default().fg(theme::header::LOADING),
        ))]
    } else {
        app.stats
            .summary_lines()
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let style = if i == 0 {
                    theme::header::TOTAL
                } else {
                    Style::default().fg(theme::header::FIGURE)
                };
                Line::from(Span::styled(format!(" {}", text), style))
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::filter::FilterCriteria;
    use crate::test_utils::test_helpers::{create_test_loader, sample_comics, test_app};
    use insta::assert_snapshot;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, STATS_CARD_HEIGHT)).unwrap();
        terminal.draw(|f| render_card(app, f, f.area())).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn snapshot_stats_card() {
        let app = test_app(sample_comics());
        assert_snapshot!(render(&app));
    }

    #[test]
    fn snapshot_stats_card_empty() {
        let app = test_app(Vec::new());
        assert_snapshot!(render(&app));
    }

    #[test]
    fn snapshot_stats_card_loading() {
        let loader = create_test_loader(Ok(sample_comics()));
        let app = App::new_with_loader(loader, &Config::default(), FilterCriteria::default());
        assert_snapshot!(render(&app));
    }

    #[test]
    fn test_footer_follows_cycled_field() {
        let mut app = test_app(sample_comics());
        app.cycle_stat_field();
        let output = render(&app);
        assert!(output.contains("F4: creators"));
        assert!(output.contains("Average creators per comic"));
    }
}
