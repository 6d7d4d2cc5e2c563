//! Title search box
//!
//! Every edit narrows the comic list by a case-insensitive title substring.

pub mod search_events;
pub mod search_render;
mod search_state;

pub use search_state::SearchState;
