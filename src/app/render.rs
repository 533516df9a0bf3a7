use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::example_list::example_list_render;
use crate::theme;

pub const HEADER_HEIGHT: u16 = 2;
pub const FOOTER_HEIGHT: u16 = 1;

const FOOTER_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "select"),
    ("Enter", "ask"),
    ("1-9", "pick"),
    ("q", "quit"),
];

impl App {
    /// Render the UI and record component regions for mouse handling
    pub fn render(&mut self, frame: &mut Frame) {
        // Borders take two rows; keep at least one row of content
        let available = frame
            .area()
            .height
            .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);
        let list_height = u16::try_from(self.examples.len())
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(2)
            .min(available);

        let layout = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(list_height),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

        let header_area = layout[0];
        let list_area = layout[1];
        let footer_area = layout[3];

        self.layout_regions.clear();
        self.selection.clamp(self.examples.len());

        frame.render_widget(header(), header_area);
        self.layout_regions.header = Some(header_area);

        self.layout_regions.example_entries = example_list_render::render_list(
            &self.examples,
            &self.selection,
            true,
            frame,
            list_area,
        );
        self.layout_regions.example_list = Some(list_area);

        frame.render_widget(footer(), footer_area);
        self.layout_regions.footer = Some(footer_area);
    }
}

fn header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Wellbore data assistant",
            Style::default()
                .fg(theme::header::TITLE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pick an example question to get started",
            Style::default().fg(theme::header::SUBTITLE),
        )),
    ])
}

fn footer() -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, (key, description)) in FOOTER_KEYS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme::footer::KEY)));
        spans.push(Span::styled(
            format!(" {}", description),
            Style::default().fg(theme::footer::DESCRIPTION),
        ));
    }
    Paragraph::new(Line::from(spans))
}
