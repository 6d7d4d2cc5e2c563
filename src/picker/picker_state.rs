use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::matcher::OptionMatcher;
use crate::scroll::SelectionState;

/// Which filter a picker edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Character,
    ComicType,
}

impl PickerKind {
    pub fn title(self) -> &'static str {
        match self {
            PickerKind::Character => "Character",
            PickerKind::ComicType => "Type",
        }
    }

    /// Label of the entry that clears the filter
    pub fn any_label(self) -> &'static str {
        match self {
            PickerKind::Character => "Any character",
            PickerKind::ComicType => "Any type",
        }
    }
}

/// Entry the user confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerChoice {
    Any,
    Value(String),
}

impl PickerChoice {
    pub fn into_option(self) -> Option<String> {
        match self {
            PickerChoice::Any => None,
            PickerChoice::Value(v) => Some(v),
        }
    }
}

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// Open picker popup
///
/// Entry 0 is always the "Any" entry; entry `n + 1` is `options[filtered[n]]`.
pub struct PickerState {
    kind: PickerKind,
    options: Vec<String>,
    filtered: Vec<usize>,
    search_textarea: TextArea<'static>,
    matcher: OptionMatcher,
    pub selection: SelectionState,
}

impl PickerState {
    /// Picker over `options` with the cursor on `current` when it is listed
    pub fn new(kind: PickerKind, options: Vec<String>, current: Option<&str>) -> Self {
        let filtered: Vec<usize> = (0..options.len()).collect();
        let mut selection = SelectionState::new();
        selection.set_len(filtered.len() + 1);

        if let Some(pos) = current.and_then(|c| options.iter().position(|o| o == c)) {
            for _ in 0..=pos {
                selection.select_next();
            }
        }

        Self {
            kind,
            options,
            filtered,
            search_textarea: create_search_textarea(),
            matcher: OptionMatcher::default(),
            selection,
        }
    }

    pub fn kind(&self) -> PickerKind {
        self.kind
    }

    pub fn query(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    /// Re-run the fuzzy filter after the query changed
    ///
    /// The cursor jumps to the best match, or to "Any" when nothing matches.
    pub fn on_search_input_changed(&mut self) {
        self.filtered = self.matcher.filter(self.query(), &self.options);
        self.selection.set_len(self.filtered.len() + 1);
        self.selection.jump_to_top();
        if !self.filtered.is_empty() && !self.query().trim().is_empty() {
            self.selection.select_next();
        }
    }

    pub fn total_count(&self) -> usize {
        self.options.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Labels of all entries, "Any" first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.kind.any_label())
            .chain(self.filtered.iter().map(|&i| self.options[i].as_str()))
    }

    pub fn selected_choice(&self) -> PickerChoice {
        match self.selection.current() {
            Some(0) | None => PickerChoice::Any,
            Some(n) => self
                .filtered
                .get(n - 1)
                .map(|&i| PickerChoice::Value(self.options[i].clone()))
                .unwrap_or(PickerChoice::Any),
        }
    }
}
