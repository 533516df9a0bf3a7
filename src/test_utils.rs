#[cfg(test)]
pub mod test_helpers {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::app::App;
    use crate::config::Config;

    pub const TEST_WIDTH: u16 = 60;
    pub const TEST_HEIGHT: u16 = 9;

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(mouse_event(MouseEventKind::Down(MouseButton::Left), column, row))
    }

    /// Render the app once so layout regions are populated
    pub fn render_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
    }
}
