use crate::catalog::{CatalogLoader, ComicRecord};
use crate::config::{ClipboardBackend, Config};
use crate::filter::{FilterCriteria, matching_indices};
use crate::notification::NotificationState;
use crate::picker::PickerState;
use crate::scroll::SelectionState;
use crate::search::SearchState;
use crate::stats::{self, StatsState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchField,
    ResultsPane,
}

pub struct App {
    /// Full collection as loaded; never filtered in place
    pub comics: Vec<ComicRecord>,
    pub criteria: FilterCriteria,
    /// Indices into `comics` passing `criteria`, in collection order
    pub visible: Vec<usize>,
    pub loader: Option<CatalogLoader>,
    pub focus: Focus,
    pub search: SearchState,
    pub results: SelectionState,
    pub picker: Option<PickerState>,
    pub stats: StatsState,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
}

impl App {
    /// App with an empty collection and `criteria` pre-applied
    pub fn new(config: &Config, criteria: FilterCriteria) -> Self {
        Self {
            comics: Vec::new(),
            search: SearchState::new(&criteria.title_substring),
            criteria,
            visible: Vec::new(),
            loader: None,
            focus: Focus::SearchField,
            results: SelectionState::new(),
            picker: None,
            stats: StatsState::new(config.stats.field),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
        }
    }

    /// App whose collection arrives later from `loader`
    pub fn new_with_loader(loader: CatalogLoader, config: &Config, criteria: FilterCriteria) -> Self {
        let mut app = Self::new(config, criteria);
        app.loader = Some(loader);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_loading(&self) -> bool {
        self.loader.as_ref().is_some_and(CatalogLoader::is_loading)
    }

    /// Pick up the loader result once it arrives
    ///
    /// A failed load leaves the collection empty and shows a warning.
    pub fn poll_loader(&mut self) {
        let Some(result) = self.loader.as_mut().and_then(CatalogLoader::poll) else {
            return;
        };

        match result {
            Ok(comics) => {
                log::info!("Loaded {} comics", comics.len());
                self.set_comics(comics);
            }
            Err(e) => {
                log::error!("Failed to load comics: {}", e);
                self.notification
                    .show_warning(&format!("Failed to load comics: {}", e));
                self.set_comics(Vec::new());
            }
        }
    }

    /// Replace the collection, then refilter and recompute stats
    pub fn set_comics(&mut self, comics: Vec<ComicRecord>) {
        self.comics = comics;
        self.update_stats();
        self.refilter();
    }

    pub fn update_stats(&mut self) {
        stats::update_stats_from_app(self);
    }

    /// Recompute `visible` and clamp the list selection
    pub fn refilter(&mut self) {
        self.visible = matching_indices(&self.comics, &self.criteria);
        self.results.set_len(self.visible.len());
    }

    pub fn visible_comics(&self) -> impl Iterator<Item = &ComicRecord> {
        self.visible.iter().filter_map(|&i| self.comics.get(i))
    }

    pub fn selected_comic(&self) -> Option<&ComicRecord> {
        self.results
            .current()
            .and_then(|pos| self.visible.get(pos))
            .and_then(|&i| self.comics.get(i))
    }

    pub fn set_title_filter(&mut self, title: &str) {
        self.criteria.title_substring = title.to_string();
        self.results.jump_to_top();
        self.refilter();
    }

    pub fn set_character_filter(&mut self, name: Option<String>) {
        log::debug!("Character filter set to {:?}", name);
        self.criteria.character_name = name;
        self.results.jump_to_top();
        self.refilter();
    }

    pub fn set_type_filter(&mut self, comic_type: Option<String>) {
        log::debug!("Type filter set to {:?}", comic_type);
        self.criteria.comic_type = comic_type;
        self.results.jump_to_top();
        self.refilter();
    }

    /// Reset the search box and both dropdowns
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.criteria = FilterCriteria::default();
        self.results.jump_to_top();
        self.refilter();
    }

    /// Summarize the next numeric attribute
    pub fn cycle_stat_field(&mut self) {
        self.stats.cycle_field(&self.comics);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
