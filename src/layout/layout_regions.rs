use ratatui::layout::Rect;

/// Top-level screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    ExampleList,
    Footer,
}

/// Screen rectangle of one rendered example entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRegion {
    /// Position of the example in the list
    pub key: usize,
    pub area: Rect,
}

/// Where each component was drawn in the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub header: Option<Rect>,
    pub example_list: Option<Rect>,
    pub footer: Option<Rect>,
    pub example_entries: Vec<EntryRegion>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
