//! Viewport arithmetic for the assignment list
//!
//! Provides:
//! - Selection movement (up/down/home/end/page)
//! - Scroll offset that keeps the selection on screen
//! - Clamping after the list shrinks

use std::ops::Range;

/// Selection and first visible row of a single-column list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListScroll {
    /// Selected row (meaningless while the list is empty)
    pub selected: usize,
    /// First row drawn
    pub offset: usize,
}

impl ListScroll {
    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down, stopping at the last row
    pub fn move_down(&mut self, total: usize) {
        if self.selected + 1 < total {
            self.selected += 1;
        }
    }

    /// Jump back one page
    pub fn page_up(&mut self, height: usize) {
        self.selected = self.selected.saturating_sub(height.max(1));
    }

    /// Jump forward one page
    pub fn page_down(&mut self, total: usize, height: usize) {
        self.selected = (self.selected + height.max(1)).min(total.saturating_sub(1));
    }

    /// Move to first row
    pub fn home(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Move to last row
    pub fn end(&mut self, total: usize) {
        self.selected = total.saturating_sub(1);
    }

    /// Pull selection and offset back inside a list of `total` rows
    pub fn clamp(&mut self, total: usize) {
        if total == 0 {
            *self = Self::default();
            return;
        }
        self.selected = self.selected.min(total - 1);
        self.offset = self.offset.min(total - 1);
    }

    /// Rows to draw in a viewport of `height` lines.
    ///
    /// Adjusts `offset` so the selected row is inside the returned range.
    pub fn visible_range(&mut self, total: usize, height: usize) -> Range<usize> {
        if total == 0 || height == 0 {
            return 0..0;
        }
        self.clamp(total);

        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }

        // Don't leave blank rows at the bottom when the list could fill them
        let max_offset = total.saturating_sub(height);
        self.offset = self.offset.min(max_offset);

        self.offset..(self.offset + height).min(total)
    }
}
