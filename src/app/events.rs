use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::mouse_click::handle_click;
use super::mouse_hover::handle_hover;
use super::state::App;
use crate::example_list::example_list_events;
use crate::layout::region_at;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }

        self.poll_picked();
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if example_list_events::handle_key(&mut self.examples, &mut self.selection, key) {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc if self.selection.get_selected().is_some() => {
                self.selection.clear_selection();
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(_) => handle_click(self, region, mouse),
            MouseEventKind::Moved => handle_hover(self, region, mouse),
            _ => {}
        }
    }
}
