//! Mouse hover handling

use ratatui::crossterm::event::MouseEvent;

use super::state::App;
use crate::example_list::example_list_events;
use crate::layout::Region;

/// Update hover state from the cursor position
pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::ExampleList) => {
            example_list_events::handle_mouse(
                &mut app.examples,
                &mut app.selection,
                &app.layout_regions.example_entries,
                mouse,
            );
        }
        _ => clear_hover(app),
    }
}

/// Clear hover state when the cursor leaves the list
fn clear_hover(app: &mut App) {
    if app.selection.get_hovered().is_some() {
        app.selection.clear_hover();
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
