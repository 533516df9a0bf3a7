//! Mouse click handling
//!
//! Routes clicks to the component under the cursor.

use ratatui::crossterm::event::MouseEvent;

use super::state::App;
use crate::example_list::example_list_events;
use crate::layout::Region;

/// Handle a mouse button press for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::ExampleList) => click_example_list(app, mouse),
        // Header and footer are static text
        _ => {}
    }
}

fn click_example_list(app: &mut App, mouse: MouseEvent) {
    example_list_events::handle_mouse(
        &mut app.examples,
        &mut app.selection,
        &app.layout_regions.example_entries,
        mouse,
    );
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
