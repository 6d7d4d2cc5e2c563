use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use crate::picker::picker_events;
use crate::results;
use crate::search::search_events;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Wait up to one tick for a terminal event and dispatch it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Pasted text goes to the search box, newlines dropped
    fn handle_paste_event(&mut self, text: String) {
        if self.picker.is_some() || self.focus != Focus::SearchField {
            return;
        }
        let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.search.textarea_mut().insert_str(&line);
        let query = self.search.query().to_string();
        self.set_title_filter(&query);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        if self.picker.is_some() {
            picker_events::handle_picker_key(self, key);
            return;
        }

        match self.focus {
            Focus::SearchField => search_events::handle_search_key(self, key),
            Focus::ResultsPane => results::results_events::handle_results_pane_key(self, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, sample_comics, test_app, type_text};
    use ratatui::crossterm::event::KeyCode;

    #[test]
    fn test_picker_captures_keys() {
        let mut app = test_app(sample_comics());
        app.focus = Focus::ResultsPane;
        app.handle_key_event(key(KeyCode::Char('c')));
        assert!(app.picker.is_some());

        // 'q' narrows the picker instead of quitting
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.picker.as_ref().unwrap().query(), "q");
    }

    #[test]
    fn test_typing_q_in_search_does_not_quit() {
        let mut app = test_app(sample_comics());
        type_text(&mut app, "q");
        assert!(!app.should_quit());
        assert_eq!(app.search.query(), "q");
    }

    #[test]
    fn test_paste_into_search() {
        let mut app = test_app(sample_comics());
        app.handle_paste_event("Avengers\n".to_string());
        assert_eq!(app.search.query(), "Avengers");
        assert_eq!(app.visible.len(), 1);
    }

    #[test]
    fn test_paste_ignored_when_list_focused() {
        let mut app = test_app(sample_comics());
        app.focus = Focus::ResultsPane;
        app.handle_paste_event("Avengers".to_string());
        assert_eq!(app.search.query(), "");
        assert_eq!(app.visible.len(), 4);
    }
}
