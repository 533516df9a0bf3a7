//! Example list rendering
//!
//! Draws the examples inside a rounded block, one single-line entry per
//! example, and reports where each entry landed for mouse hit testing.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use super::item::EntryHighlight;
use super::list::ExampleList;
use super::selection::ExampleSelection;
use crate::layout::EntryRegion;
use crate::theme;

/// Render the example list into `area`
///
/// Returns one region per visible entry, in display order. When there are
/// more examples than rows, the window scrolls to keep the selection visible.
pub fn render_list(
    list: &ExampleList,
    selection: &ExampleSelection,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) -> Vec<EntryRegion> {
    let border_color = if focused {
        theme::examples::BORDER_FOCUSED
    } else {
        theme::examples::BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(Span::styled(
            format!(" {} ", list.title()),
            Style::default()
                .fg(theme::examples::TITLE)
                .add_modifier(Modifier::BOLD),
        )));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let window = visible_window(list.len(), inner.height as usize, selection.get_selected());

    let items: Vec<ListItem> = list
        .entries()
        .skip(window.start)
        .take(window.len())
        .map(|entry| entry.to_list_item(inner.width, highlight_for(entry.key, selection)))
        .collect();

    frame.render_widget(List::new(items), inner);

    window
        .enumerate()
        .map(|(row, key)| EntryRegion {
            key,
            area: Rect {
                x: inner.x,
                y: inner.y + row as u16,
                width: inner.width,
                height: 1,
            },
        })
        .collect()
}

/// Range of entry indices that fit in `rows`, scrolled so `selected` is shown
pub fn visible_window(total: usize, rows: usize, selected: Option<usize>) -> Range<usize> {
    if rows == 0 || total == 0 {
        return 0..0;
    }

    let offset = match selected {
        Some(index) if index >= rows => (index + 1 - rows).min(total.saturating_sub(rows)),
        _ => 0,
    };
    let end = (offset + rows).min(total);
    offset..end
}

fn highlight_for(key: usize, selection: &ExampleSelection) -> EntryHighlight {
    if selection.get_selected() == Some(key) {
        EntryHighlight::Selected
    } else if selection.get_hovered() == Some(key) {
        EntryHighlight::Hovered
    } else {
        EntryHighlight::None
    }
}

#[cfg(test)]
#[path = "example_list_render_tests.rs"]
mod example_list_render_tests;
