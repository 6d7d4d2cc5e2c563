use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::search::search_render::FILTER_BAR_HEIGHT;
use crate::stats::stats_render::STATS_CARD_HEIGHT;

impl App {
    /// Stats card, filter bar, comic list and key hints, then any popups on top
    pub fn render(&mut self, frame: &mut Frame) {
        let [stats_area, filter_area, results_area, help_area] = Layout::vertical([
            Constraint::Length(STATS_CARD_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        crate::stats::stats_render::render_card(self, frame, stats_area);
        crate::search::search_render::render_filter_bar(self, frame, filter_area);
        crate::results::results_render::render_pane(self, frame, results_area);
        crate::help::help_line_render::render_line(self, frame, help_area);

        if let Some(picker) = self.picker.as_mut() {
            crate::picker::picker_render::render_popup(picker, frame);
        }

        render_notification(frame, &mut self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
