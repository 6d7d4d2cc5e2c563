//! State management for collection statistics
//!
//! `StatsState` caches the summary for the currently selected attribute and
//! formats it for the stats card, the clipboard and print mode.

use crate::app::App;
use crate::catalog::ComicRecord;
use crate::stats::compute::compute_stats;
use crate::stats::types::{StatField, StatsResult};

/// Recompute stats over the App's full collection
///
/// This is the delegation function called by `App::update_stats()`.
pub fn update_stats_from_app(app: &mut App) {
    app.stats.compute(&app.comics);
}

/// Placeholder for figures that are undefined on an empty collection
const UNDEFINED: &str = "n/a";

#[derive(Debug, Clone, Default)]
pub struct StatsState {
    field: StatField,
    total: usize,
    /// None until computed, and for an empty collection
    result: Option<StatsResult>,
}

impl StatsState {
    pub fn new(field: StatField) -> Self {
        Self {
            field,
            ..Default::default()
        }
    }

    /// Recompute the summary over `records` for the current field
    pub fn compute(&mut self, records: &[ComicRecord]) {
        let field = self.field;
        self.total = records.len();
        self.result = compute_stats(records, |r| field.value(r)).ok();
    }

    pub fn field(&self) -> StatField {
        self.field
    }

    /// Switch to the next attribute and recompute
    pub fn cycle_field(&mut self, records: &[ComicRecord]) {
        self.field = self.field.next();
        self.compute(records);
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn result(&self) -> Option<&StatsResult> {
        self.result.as_ref()
    }

    /// Lines shown on the stats card, in display order
    pub fn summary_lines(&self) -> Vec<String> {
        let field = self.field;
        let (average, median, mode) = match &self.result {
            Some(r) => (
                format!("{:.2}", r.average),
                r.median.to_string(),
                r.modes
                    .iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            None => (
                UNDEFINED.to_string(),
                UNDEFINED.to_string(),
                UNDEFINED.to_string(),
            ),
        };

        vec![
            format!("Total Comics: {}", self.total),
            format!("Average {} per comic: {}", field, average),
            format!("Median {} per comic: {}", field, median),
            format!("Mode {} per comic: {}", field, mode),
        ]
    }

    /// Summary as one newline separated block
    pub fn summary_text(&self) -> String {
        self.summary_lines().join("\n")
    }
}
