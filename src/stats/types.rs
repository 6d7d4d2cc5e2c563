//! Type definitions for collection statistics

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::ComicRecord;

/// Numeric attribute of a comic that statistics are computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StatField {
    /// Characters listed as available
    #[default]
    CharacterCount,
    /// Creators listed as available
    CreatorCount,
    /// Printed page count
    PageCount,
    /// Stories listed as available
    StoryCount,
}

impl StatField {
    pub const ALL: [StatField; 4] = [
        StatField::CharacterCount,
        StatField::CreatorCount,
        StatField::PageCount,
        StatField::StoryCount,
    ];

    /// Extract this attribute from a record
    pub fn value(self, record: &ComicRecord) -> u32 {
        match self {
            StatField::CharacterCount => record.character_count,
            StatField::CreatorCount => record.creator_count,
            StatField::PageCount => record.page_count,
            StatField::StoryCount => record.story_count,
        }
    }

    /// Next field in display order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatField::CharacterCount => write!(f, "characters"),
            StatField::CreatorCount => write!(f, "creators"),
            StatField::PageCount => write!(f, "pages"),
            StatField::StoryCount => write!(f, "stories"),
        }
    }
}

/// Summary statistics over a non-empty collection
#[derive(Debug, Clone, PartialEq)]
pub struct StatsResult {
    /// Number of records summarized
    pub total: usize,
    pub average: f64,
    pub median: f64,
    /// Every value with the highest frequency, ascending
    pub modes: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("cannot summarize an empty collection")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_extraction() {
        let record = ComicRecord {
            character_count: 1,
            creator_count: 2,
            page_count: 3,
            story_count: 4,
            ..Default::default()
        };
        assert_eq!(StatField::CharacterCount.value(&record), 1);
        assert_eq!(StatField::CreatorCount.value(&record), 2);
        assert_eq!(StatField::PageCount.value(&record), 3);
        assert_eq!(StatField::StoryCount.value(&record), 4);
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut field = StatField::CharacterCount;
        for _ in 0..StatField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, StatField::CharacterCount);
        assert_eq!(StatField::StoryCount.next(), StatField::CharacterCount);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(StatField::CharacterCount.to_string(), "characters");
        assert_eq!(StatField::PageCount.to_string(), "pages");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            StatsError::EmptyInput.to_string(),
            "cannot summarize an empty collection"
        );
    }
}
