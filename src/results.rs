//! Comic list pane

pub mod results_events;
pub mod results_render;
