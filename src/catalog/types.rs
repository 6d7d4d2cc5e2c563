//! Comic data model

/// A character appearing in a comic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRef {
    pub id: u64,
    pub name: String,
}

/// One comic entry from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComicRecord {
    pub id: u64,
    pub title: String,
    /// Format label such as "comic" or "trade paperback"
    pub comic_type: String,
    /// Number of characters the catalog reports as available
    pub character_count: u32,
    /// Characters listed for this comic, in catalog order
    pub characters: Vec<CharacterRef>,
    pub thumbnail_url: String,
    pub page_count: u32,
    pub creator_count: u32,
    pub story_count: u32,
}

impl ComicRecord {
    /// Whether any listed character has exactly this name
    pub fn has_character(&self, name: &str) -> bool {
        self.characters.iter().any(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(names: &[&str]) -> ComicRecord {
        ComicRecord {
            characters: names
                .iter()
                .enumerate()
                .map(|(i, n)| CharacterRef {
                    id: i as u64,
                    name: n.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_has_character_exact_match() {
        let record = record_with(&["Spider-Man (Peter Parker)", "Venom"]);
        assert!(record.has_character("Venom"));
        assert!(!record.has_character("venom"));
        assert!(!record.has_character("Spider-Man"));
    }

    #[test]
    fn test_has_character_empty_list() {
        let record = record_with(&[]);
        assert!(!record.has_character("Venom"));
    }
}
