//! Single example entry
//!
//! The per-item rendering unit: turns one (text, value) pair into a list row
//! and forwards clicks with its value.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme;

/// Entries that get a number key shortcut (1-9)
pub const MAX_NUMBERED_ENTRIES: usize = 9;

/// Width of the ` N. ` prefix, also used to indent unnumbered entries
pub const PREFIX_WIDTH: usize = 4;

/// Visual emphasis applied to an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryHighlight {
    #[default]
    None,
    Hovered,
    Selected,
}

/// A borrowed view of one example, keyed by its position in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example<'a> {
    pub key: usize,
    pub text: &'a str,
    pub value: &'a str,
}

impl<'a> Example<'a> {
    /// Invoke `on_click` with this entry's value
    pub fn click<F>(&self, on_click: F)
    where
        F: FnOnce(&str),
    {
        on_click(self.value);
    }

    /// The ` N. ` label for numbered entries, blank padding otherwise
    pub fn prefix(&self) -> String {
        if self.key < MAX_NUMBERED_ENTRIES {
            format!(" {}. ", self.key + 1)
        } else {
            " ".repeat(PREFIX_WIDTH)
        }
    }

    /// Render as a single-line list item that fits `width` display cells
    pub fn to_list_item(&self, width: u16, highlight: EntryHighlight) -> ListItem<'static> {
        let text_width = (width as usize).saturating_sub(PREFIX_WIDTH);
        let display_text = truncate_to_width(self.text, text_width);

        let (number_style, text_style) = match highlight {
            EntryHighlight::None => (
                Style::default().fg(theme::examples::NUMBER),
                Style::default().fg(theme::examples::ITEM_TEXT),
            ),
            EntryHighlight::Hovered => (
                Style::default()
                    .fg(theme::examples::NUMBER)
                    .bg(theme::examples::ITEM_HOVERED_BG),
                Style::default()
                    .fg(theme::examples::ITEM_TEXT)
                    .bg(theme::examples::ITEM_HOVERED_BG),
            ),
            EntryHighlight::Selected => (
                Style::default()
                    .fg(theme::examples::ITEM_SELECTED_FG)
                    .bg(theme::examples::ITEM_SELECTED_BG),
                Style::default()
                    .fg(theme::examples::ITEM_SELECTED_FG)
                    .bg(theme::examples::ITEM_SELECTED_BG)
                    .add_modifier(theme::examples::ITEM_SELECTED_MODIFIER),
            ),
        };

        let line = Line::from(vec![
            Span::styled(self.prefix(), number_style),
            Span::styled(display_text, text_style),
        ]);

        // Row background covers the whole width when highlighted
        let row_style = match highlight {
            EntryHighlight::None => Style::default(),
            EntryHighlight::Hovered => Style::default().bg(theme::examples::ITEM_HOVERED_BG),
            EntryHighlight::Selected => Style::default().bg(theme::examples::ITEM_SELECTED_BG),
        };

        ListItem::new(line).style(row_style)
    }
}

/// Truncate `text` to at most `max_width` display cells, ending in `…` when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod item_tests;
