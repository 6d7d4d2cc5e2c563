use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::{PickerKind, PickerState};
use crate::app::App;
use crate::filter::{character_names, comic_types};

/// Open a picker listing the options found in the loaded collection
pub fn open_picker(app: &mut App, kind: PickerKind) {
    let (options, current) = match kind {
        PickerKind::Character => (
            character_names(&app.comics),
            app.criteria.character_name.as_deref(),
        ),
        PickerKind::ComicType => (comic_types(&app.comics), app.criteria.comic_type.as_deref()),
    };

    log::debug!("Opening {} picker with {} options", kind.title(), options.len());
    app.picker = Some(PickerState::new(kind, options, current));
}

/// Handle keys while a picker is open
pub fn handle_picker_key(app: &mut App, key: KeyEvent) {
    let Some(picker) = app.picker.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Up => picker.selection.select_previous(),
        KeyCode::Down => picker.selection.select_next(),
        KeyCode::PageUp => picker.selection.page_up(),
        KeyCode::PageDown => picker.selection.page_down(),

        KeyCode::Enter => {
            let kind = picker.kind();
            let value = picker.selected_choice().into_option();
            app.picker = None;
            match kind {
                PickerKind::Character => app.set_character_filter(value),
                PickerKind::ComicType => app.set_type_filter(value),
            }
        }

        KeyCode::Esc => app.picker = None,

        _ => {
            if picker.search_textarea_mut().input(key) {
                picker.on_search_input_changed();
            }
        }
    }
}
