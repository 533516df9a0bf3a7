//! Selection state for the example list
//!
//! Tracks keyboard selection and mouse hover. This is view state only; the
//! example data itself never changes.

/// Selection and hover state for example list navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleSelection {
    /// Currently selected entry index (None = no selection)
    selected_index: Option<usize>,
    /// Entry under the mouse cursor
    hovered_index: Option<usize>,
    /// Whether the user has moved the selection with the keyboard
    navigation_active: bool,
}

impl ExampleSelection {
    pub fn new() -> Self {
        Self {
            selected_index: None,
            hovered_index: None,
            navigation_active: false,
        }
    }

    /// Select a specific entry directly (number keys)
    ///
    /// Direct selection does not activate navigation mode.
    pub fn select_index(&mut self, index: usize) {
        self.selected_index = Some(index);
        self.navigation_active = false;
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
        self.navigation_active = false;
    }

    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Navigation mode is active once the user moved the selection with
    /// Up/Down/j/k/Tab. In this mode Enter clicks the selected entry.
    pub fn is_navigation_active(&self) -> bool {
        self.navigation_active
    }

    /// Move to the next entry, wrapping to the first after the last
    pub fn navigate_next(&mut self, entry_count: usize) {
        if entry_count == 0 {
            return;
        }

        self.navigation_active = true;

        self.selected_index = match self.selected_index {
            Some(current) => Some((current + 1) % entry_count),
            None => Some(0),
        };
    }

    /// Move to the previous entry, wrapping to the last before the first
    pub fn navigate_previous(&mut self, entry_count: usize) {
        if entry_count == 0 {
            return;
        }

        self.navigation_active = true;

        self.selected_index = match self.selected_index {
            Some(0) | None => Some(entry_count - 1),
            Some(current) => Some(current - 1),
        };
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered_index = index;
    }

    pub fn clear_hover(&mut self) {
        self.hovered_index = None;
    }

    pub fn get_hovered(&self) -> Option<usize> {
        self.hovered_index
    }

    /// Drop indices that no longer point at an entry
    pub fn clamp(&mut self, entry_count: usize) {
        if self.selected_index.is_some_and(|i| i >= entry_count) {
            self.clear_selection();
        }
        if self.hovered_index.is_some_and(|i| i >= entry_count) {
            self.clear_hover();
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
