//! Shared test utilities for comiq
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::catalog::{CatalogLoader, CharacterRef, ComicRecord, LoadingState};
    use crate::error::ComiqError;
    use crate::config::Config;
    use crate::filter::FilterCriteria;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Build a record with the fields the filters and stats look at
    pub fn record(
        id: u64,
        title: &str,
        comic_type: &str,
        character_count: u32,
        names: &[&str],
    ) -> ComicRecord {
        ComicRecord {
            id,
            title: title.to_string(),
            comic_type: comic_type.to_string(),
            character_count,
            characters: names
                .iter()
                .enumerate()
                .map(|(i, name)| CharacterRef {
                    id: 1_009_000 + i as u64,
                    name: name.to_string(),
                })
                .collect(),
            thumbnail_url: format!("http://i.annihil.us/u/prod/marvel/i/mg/{}.jpg", id),
            ..Default::default()
        }
    }

    /// Small collection with character counts [3, 5, 5, 7]
    pub fn sample_comics() -> Vec<ComicRecord> {
        vec![
            record(1, "Spider-Man #1", "comic", 3, &["Spider-Man (Peter Parker)", "Mary Jane Watson", "Venom"]),
            record(2, "X-Men #2", "comic", 5, &["Storm", "Cyclops", "Wolverine", "Rogue", "Gambit"]),
            record(3, "Uncanny X-Men Omnibus", "trade paperback", 5, &["Storm", "Cyclops", "Jean Grey", "Beast", "Angel"]),
            record(4, "Avengers: Infinity", "graphic novel", 7, &["Thor", "Iron Man", "Hulk", "Wolverine", "Storm", "Vision", "Hawkeye"]),
        ]
    }

    /// Helper to create an App holding `comics`, with default config
    pub fn test_app(comics: Vec<ComicRecord>) -> App {
        let mut app = App::new(&Config::default(), FilterCriteria::default());
        app.set_comics(comics);
        app
    }

    /// Loader whose result is already waiting in the channel
    pub fn create_test_loader(result: Result<Vec<ComicRecord>, ComiqError>) -> CatalogLoader {
        let (tx, rx) = std::sync::mpsc::channel();
        tx.send(result).unwrap();
        CatalogLoader {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type each character of `text` as a key press
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// Render the whole app to a string buffer
    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }
}
