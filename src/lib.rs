//! comiq library - Interactive comics catalog browser
//!
//! This library exposes the core functionality of comiq for the binary and
//! for testing.

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod help;
pub mod notification;
pub mod picker;
pub mod results;
pub mod scroll;
pub mod search;
pub mod stats;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
