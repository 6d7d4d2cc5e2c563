use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.picker.is_some() {
        hints!["↑/↓" => "Move", "Enter" => "Apply", "Esc" => "Cancel", "type" => "Narrow"]
    } else if app.focus == Focus::SearchField {
        hints!["Tab" => "List", "F2" => "Character", "F3" => "Type", "F4" => "Stat", "Ctrl+X" => "Clear", "Ctrl+Y" => "Copy Stats", "Ctrl+C" => "Quit"]
    } else {
        hints!["Tab" => "Search", "j/k" => "Move", "c" => "Character", "t" => "Type", "s" => "Stat", "y" => "Copy Comic", "Ctrl+X" => "Clear", "q" => "Quit"]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let spans = build_styled_spans(&get_context_hints(app));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
