/// Cursor and viewport for a vertical list
///
/// `selected` is an index into the list; `offset` is the first visible row.
/// Both are clamped whenever the list length or viewport changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected: usize,
    pub offset: usize,
    pub viewport_height: u16,
    len: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set the list length, keeping the selection in bounds
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
        self.ensure_visible();
    }

    pub fn update_viewport(&mut self, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.ensure_visible();
    }

    pub fn select_next(&mut self) {
        self.move_by(1);
    }

    pub fn select_previous(&mut self) {
        self.move_by(-1);
    }

    pub fn page_down(&mut self) {
        let half_page = (self.viewport_height / 2).max(1) as isize;
        self.move_by(half_page);
    }

    pub fn page_up(&mut self) {
        let half_page = (self.viewport_height / 2).max(1) as isize;
        self.move_by(-half_page);
    }

    pub fn jump_to_top(&mut self) {
        self.selected = 0;
        self.ensure_visible();
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected = self.len.saturating_sub(1);
        self.ensure_visible();
    }

    /// Selected index, or None for an empty list
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.selected)
    }

    fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let max = self.len - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        let height = self.viewport_height as usize;
        if height == 0 {
            self.offset = 0;
            return;
        }

        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }

        let max_offset = self.len.saturating_sub(height);
        self.offset = self.offset.min(max_offset);
    }
}
