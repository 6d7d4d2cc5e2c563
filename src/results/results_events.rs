use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Focus};
use crate::clipboard;
use crate::picker::{PickerKind, picker_events::open_picker};

/// Handle keys while the comic list has focus
pub fn handle_results_pane_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') | KeyCode::Char('i') => {
            app.focus = Focus::SearchField;
        }

        KeyCode::Up | KeyCode::Char('k') => app.results.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.results.select_next(),
        KeyCode::PageUp => app.results.page_up(),
        KeyCode::PageDown => app.results.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.results.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.results.jump_to_bottom(),

        KeyCode::Char('c') => open_picker(app, PickerKind::Character),
        KeyCode::Char('t') => open_picker(app, PickerKind::ComicType),
        KeyCode::Char('s') => app.cycle_stat_field(),

        KeyCode::Char('y') => {
            clipboard::clipboard_events::handle_yank_key(app);
        }

        KeyCode::Char('q') => app.should_quit = true,

        _ => {}
    }
}
