//! Clipboard support
//!
//! Copies go to the system clipboard through arboard, or to the terminal
//! through an OSC 52 escape sequence when running over SSH or tmux.

mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, copy_to_clipboard};
