use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of at most `width` x `height`, centered in `frame_area`
pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2,
        y: frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Rect anchored to the top-right corner of `frame_area`, `margin` cells in
pub fn top_right(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(margin * 2));
    let height = height.min(frame_area.height.saturating_sub(margin * 2));

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + margin),
        y: frame_area.y + margin,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
