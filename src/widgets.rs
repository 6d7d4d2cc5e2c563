//! Small rendering helpers shared by popups

pub mod popup;
