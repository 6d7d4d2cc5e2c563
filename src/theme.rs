//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Stats card at the top of the screen
pub mod header {
    use super::*;

    pub const BORDER: Color = palette::RED;
    pub const TITLE: Style = Style::new().fg(palette::RED).add_modifier(Modifier::BOLD);
    pub const TOTAL: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const FIGURE: Color = palette::TEXT;
    pub const LOADING: Color = palette::YELLOW;
    pub const FIELD_HINT: Color = palette::TEXT_DIM;
}

/// Search box and dropdown boxes
pub mod filter_bar {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const BORDER_ACTIVE_FILTER: Color = palette::MAGENTA;
    pub const TEXT: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = palette::TEXT_MUTED;
    pub const KEY_HINT: Color = palette::TEXT_DIM;
}

/// Comic list pane
pub mod results {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::TEXT;
    pub const TYPE: Color = palette::PURPLE;
    pub const FIELD_VALUE: Color = palette::GREEN;
    pub const EMPTY: Color = palette::TEXT_MUTED;
    pub const THUMBNAIL: Color = palette::TEXT_MUTED;

    pub const ITEM_SELECTED_FG: Color = palette::TEXT;
    pub const ITEM_SELECTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
}

/// Character and type pickers
pub mod picker {
    use super::*;

    pub const BORDER: Color = palette::MAGENTA;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const ITEM_NORMAL: Color = palette::TEXT;
    pub const ITEM_ANY: Color = palette::TEXT_MUTED;
    pub const ITEM_SELECTED_FG: Color = palette::TEXT;
    pub const ITEM_SELECTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
    pub const NO_MATCHES: Color = palette::TEXT_DIM;
    pub const SEARCH_BORDER: Color = palette::PINK;
}

/// Bottom key hint line
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Notification overlay
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::TEXT;
    pub const INFO_BG: Color = palette::BG_HIGHLIGHT;
    pub const INFO_BORDER: Color = palette::TEXT_MUTED;

    pub const WARNING_FG: Color = Color::Black;
    pub const WARNING_BG: Color = palette::WARNING;
    pub const WARNING_BORDER: Color = palette::WARNING;

    pub const ERROR_FG: Color = palette::TEXT;
    pub const ERROR_BG: Color = palette::ERROR;
    pub const ERROR_BORDER: Color = palette::RED;
}
