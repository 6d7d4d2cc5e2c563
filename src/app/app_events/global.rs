use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::{App, Focus};
use crate::clipboard;
use crate::notification::NotificationType;
use crate::picker::{PickerKind, picker_events::open_picker};

/// Keys that work regardless of focus
///
/// Returns true if the key was handled.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return true;
    }

    // Pickers own every other key while open
    if app.picker.is_some() {
        return false;
    }

    if key.code == KeyCode::Esc
        && app
            .notification
            .current()
            .is_some_and(|n| n.notification_type == NotificationType::Error)
    {
        app.notification.dismiss();
        return true;
    }

    if clipboard::clipboard_events::handle_clipboard_key(app, key) {
        return true;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::SearchField => Focus::ResultsPane,
                Focus::ResultsPane => Focus::SearchField,
            };
            true
        }
        KeyCode::F(2) => {
            open_picker(app, PickerKind::Character);
            true
        }
        KeyCode::F(3) => {
            open_picker(app, PickerKind::ComicType);
            true
        }
        KeyCode::F(4) => {
            app.cycle_stat_field();
            true
        }
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_filters();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
