//! Clipboard keybindings

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::copy_to_clipboard;
use crate::app::App;
use crate::catalog::ComicRecord;

/// Ctrl+Y copies the stats summary from anywhere
/// Returns true if the key was handled
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        copy_stats(app);
        return true;
    }
    false
}

/// `y` in the list copies the selected comic
pub fn handle_yank_key(app: &mut App) -> bool {
    let Some(text) = app.selected_comic().map(comic_clip_text) else {
        return false;
    };
    copy_text(app, &text, "Copied comic!")
}

fn copy_stats(app: &mut App) -> bool {
    let text = app.stats.summary_text();
    copy_text(app, &text, "Copied stats!")
}

fn copy_text(app: &mut App, text: &str, confirmation: &str) -> bool {
    match copy_to_clipboard(text, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show(confirmation);
            true
        }
        Err(e) => {
            app.notification.show_warning(&format!("Copy failed: {}", e));
            false
        }
    }
}

/// Title, then the thumbnail URL on its own line when there is one
fn comic_clip_text(comic: &ComicRecord) -> String {
    if comic.thumbnail_url.is_empty() {
        comic.title.clone()
    } else {
        format!("{}\n{}", comic.title, comic.thumbnail_url)
    }
}
