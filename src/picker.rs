//! Dropdown popup for the character and comic type filters
//!
//! Lists "Any" plus every option, narrowed by a fuzzy query typed into the
//! popup's own search box.

mod matcher;
pub mod picker_events;
pub mod picker_render;
mod picker_state;

pub use picker_state::{PickerChoice, PickerKind, PickerState};
