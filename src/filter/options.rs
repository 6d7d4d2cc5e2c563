//! Option lists for the character and type pickers

use std::collections::BTreeSet;

use crate::catalog::ComicRecord;

/// Types always offered by the type picker, even before data arrives
pub const DEFAULT_COMIC_TYPES: [&str; 3] = ["comic", "graphic novel", "trade paperback"];

/// Distinct character names across the collection, sorted
pub fn character_names(records: &[ComicRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.characters.iter().map(|c| c.name.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Default types followed by any other non-empty type seen in the data, in first-seen order
pub fn comic_types(records: &[ComicRecord]) -> Vec<String> {
    let mut types: Vec<String> = DEFAULT_COMIC_TYPES.iter().map(|t| t.to_string()).collect();

    for record in records {
        if !record.comic_type.is_empty() && !types.contains(&record.comic_type) {
            types.push(record.comic_type.clone());
        }
    }

    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::record;

    #[test]
    fn test_character_names_are_distinct_and_sorted() {
        let records = vec![
            record(1, "A", "comic", 2, &["Wolverine", "Storm"]),
            record(2, "B", "comic", 2, &["Storm", "Cyclops"]),
        ];
        assert_eq!(
            character_names(&records),
            vec!["Cyclops".to_string(), "Storm".to_string(), "Wolverine".to_string()]
        );
    }

    #[test]
    fn test_character_names_empty() {
        assert!(character_names(&[]).is_empty());
    }

    #[test]
    fn test_comic_types_defaults_first() {
        assert_eq!(comic_types(&[]), DEFAULT_COMIC_TYPES.to_vec());
    }

    #[test]
    fn test_comic_types_appends_seen_types_once() {
        let records = vec![
            record(1, "A", "Digest", 0, &[]),
            record(2, "B", "comic", 0, &[]),
            record(3, "C", "", 0, &[]),
            record(4, "D", "Hardcover", 0, &[]),
            record(5, "E", "Digest", 0, &[]),
        ];
        assert_eq!(
            comic_types(&records),
            vec!["comic", "graphic novel", "trade paperback", "Digest", "Hardcover"]
        );
    }
}
