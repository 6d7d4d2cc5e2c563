use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Creates a single-line TextArea for the title search box
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text("search titles");
    textarea
}

/// Text input behind the title filter
pub struct SearchState {
    textarea: TextArea<'static>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new("")
    }
}

impl SearchState {
    /// Search box pre-filled with `initial` (from `--search`)
    pub fn new(initial: &str) -> Self {
        let mut state = Self {
            textarea: create_search_textarea(),
        };
        state.set_query(initial);
        state
    }

    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Replace the text and move the cursor to the end
    pub fn set_query(&mut self, text: &str) {
        self.clear();
        self.textarea.insert_str(text);
    }

    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let state = SearchState::default();
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_new_with_initial_text() {
        let state = SearchState::new("spider");
        assert_eq!(state.query(), "spider");
    }

    #[test]
    fn test_set_query_replaces_text() {
        let mut state = SearchState::new("spider");
        state.set_query("x-men");
        assert_eq!(state.query(), "x-men");
    }

    #[test]
    fn test_clear() {
        let mut state = SearchState::new("avengers");
        state.clear();
        assert_eq!(state.query(), "");
    }
}
