//! Style constants shared by the renderers
//!
//! Grouped per component so each renderer reads as `theme::<component>::<ROLE>`.

pub mod examples {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::DarkGray;
    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const TITLE: Color = Color::Cyan;

    pub const NUMBER: Color = Color::DarkGray;
    pub const ITEM_TEXT: Color = Color::White;

    pub const ITEM_HOVERED_BG: Color = Color::Rgb(40, 44, 52);
    pub const ITEM_SELECTED_BG: Color = Color::Rgb(50, 60, 80);
    pub const ITEM_SELECTED_FG: Color = Color::Yellow;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
}

pub mod header {
    use ratatui::style::Color;

    pub const TITLE: Color = Color::Cyan;
    pub const SUBTITLE: Color = Color::Gray;
}

pub mod footer {
    use ratatui::style::Color;

    pub const KEY: Color = Color::Yellow;
    pub const DESCRIPTION: Color = Color::DarkGray;
}
