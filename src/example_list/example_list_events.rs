//! Example list input handling
//!
//! Keyboard: Down/j/Tab and Up/k/Shift+Tab move the selection, Enter clicks
//! the entry reached that way, 1-9 click an entry directly.
//! Mouse: moving hovers the entry under the cursor, left press clicks it.

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::list::ExampleList;
use super::selection::ExampleSelection;
use crate::layout::{EntryRegion, entry_at};

/// Handle a key press for the example list
///
/// Returns `true` if the key was consumed.
pub fn handle_key(
    list: &mut ExampleList,
    selection: &mut ExampleSelection,
    key: KeyEvent,
) -> bool {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            selection.navigate_next(list.len());
            true
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            selection.navigate_previous(list.len());
            true
        }
        KeyCode::Enter if selection.is_navigation_active() => match selection.get_selected() {
            Some(index) => list.click(index),
            None => false,
        },
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            click_entry(list, selection, index)
        }
        _ => false,
    }
}

/// Handle a mouse event over the example list
///
/// `entries` are the regions recorded by the last render. Returns `true` if
/// an entry was clicked.
pub fn handle_mouse(
    list: &mut ExampleList,
    selection: &mut ExampleSelection,
    entries: &[EntryRegion],
    mouse: MouseEvent,
) -> bool {
    match mouse.kind {
        MouseEventKind::Moved => {
            selection.set_hovered(entry_at(entries, mouse.column, mouse.row));
            false
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match entry_at(entries, mouse.column, mouse.row) {
                Some(index) => click_entry(list, selection, index),
                None => false,
            }
        }
        _ => false,
    }
}

fn click_entry(list: &mut ExampleList, selection: &mut ExampleSelection, index: usize) -> bool {
    if index >= list.len() {
        return false;
    }
    selection.select_index(index);
    list.click(index)
}

#[cfg(test)]
#[path = "example_list_events_tests.rs"]
mod example_list_events_tests;
