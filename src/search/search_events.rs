//! Key handling while the search box has focus

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Focus};

/// Edit the title query, refiltering on every change
///
/// Enter, Down and Esc hand focus to the comic list.
pub fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Down | KeyCode::Esc => {
            app.focus = Focus::ResultsPane;
        }
        _ => {
            if app.search.textarea_mut().input(key) {
                let query = app.search.query().to_string();
                log::debug!("Title search changed to '{}'", query);
                app.set_title_filter(&query);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, sample_comics, test_app, type_text};

    #[test]
    fn test_typing_filters_titles() {
        let mut app = test_app(sample_comics());
        app.focus = Focus::SearchField;

        type_text(&mut app, "x-men");

        assert_eq!(app.criteria.title_substring, "x-men");
        let titles: Vec<&str> = app.visible_comics().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["X-Men #2", "Uncanny X-Men Omnibus"]);
    }

    #[test]
    fn test_backspace_widens_results() {
        let mut app = test_app(sample_comics());
        app.focus = Focus::SearchField;

        type_text(&mut app, "spiderx");
        assert_eq!(app.visible.len(), 0);

        handle_search_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.criteria.title_substring, "spider");
        assert_eq!(app.visible.len(), 1);
    }

    #[test]
    fn test_enter_moves_focus_to_list() {
        let mut app = test_app(sample_comics());
        app.focus = Focus::SearchField;

        handle_search_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.focus, Focus::ResultsPane);
        assert_eq!(app.search.query(), "");
    }

    #[test]
    fn test_cursor_movement_does_not_refilter() {
        let mut app = test_app(sample_comics());
        app.focus = Focus::SearchField;
        type_text(&mut app, "men");

        handle_search_key(&mut app, key(KeyCode::Left));

        assert_eq!(app.criteria.title_substring, "men");
        assert_eq!(app.visible.len(), 2);
    }
}
