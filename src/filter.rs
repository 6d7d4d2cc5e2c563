//! Filter module
//!
//! Narrows the comic collection by title substring, character and comic type,
//! and derives the option lists offered by the character and type pickers.

mod criteria;
mod options;

pub use criteria::{FilterCriteria, filter_records, filter_refs, matching_indices};
pub use options::{DEFAULT_COMIC_TYPES, character_names, comic_types};
