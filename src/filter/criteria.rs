use crate::catalog::ComicRecord;

/// Active filters; an empty title and `None` selections match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title
    pub title_substring: String,
    /// Exact, case-sensitive character name
    pub character_name: Option<String>,
    /// Exact comic type
    pub comic_type: Option<String>,
}

impl FilterCriteria {
    /// Whether no filter narrows the collection
    pub fn is_empty(&self) -> bool {
        self.title_substring.is_empty() && self.character_name.is_none() && self.comic_type.is_none()
    }

    /// Whether a single record passes every active filter
    pub fn matches(&self, record: &ComicRecord) -> bool {
        self.matches_title(&record.title)
            && self
                .character_name
                .as_deref()
                .is_none_or(|name| record.has_character(name))
            && self
                .comic_type
                .as_deref()
                .is_none_or(|kind| record.comic_type == kind)
    }

    fn matches_title(&self, title: &str) -> bool {
        if self.title_substring.is_empty() {
            return true;
        }
        title
            .to_lowercase()
            .contains(&self.title_substring.to_lowercase())
    }
}

/// Records passing `criteria`, in their original order
pub fn filter_records(records: &[ComicRecord], criteria: &FilterCriteria) -> Vec<ComicRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

/// Positions of the records passing `criteria`, ascending
pub fn matching_indices(records: &[ComicRecord], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// Borrowing variant of `filter_records`
pub fn filter_refs<'a>(records: &'a [ComicRecord], criteria: &FilterCriteria) -> Vec<&'a ComicRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}
