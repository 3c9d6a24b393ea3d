//! Wrapping list navigation for `ListState`.

use ratatui::widgets::ListState;

/// Extension trait for `ListState` with the moves the account list needs.
pub trait ListStateExt {
    /// Move up one item, wrapping from the first item to the last.
    fn select_previous_wrap(&mut self, total_items: usize);

    /// Move down one item, wrapping from the last item to the first.
    fn select_next_wrap(&mut self, total_items: usize);

    /// Keep the selection valid after the list changed length.
    ///
    /// An empty list clears the selection, a missing selection becomes the
    /// first item and an out-of-range one is clamped to the last.
    fn clamp_to(&mut self, total_items: usize);
}

impl ListStateExt for ListState {
    fn select_previous_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let new_index = match self.selected() {
            Some(0) | None => total_items - 1,
            Some(current) => current.min(total_items) - 1,
        };
        self.select(Some(new_index));
    }

    fn select_next_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let new_index = match self.selected() {
            Some(current) if current + 1 < total_items => current + 1,
            Some(_) => 0,
            None => 0,
        };
        self.select(Some(new_index));
    }

    fn clamp_to(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let index = self.selected().unwrap_or(0).min(total_items - 1);
        self.select(Some(index));
    }
}
