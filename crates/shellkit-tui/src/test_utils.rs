//! Headless rendering for widget and view tests
//!
//! ```ignore
//! let mut term = TestTerminal::with_size(160, 30);
//! term.draw_with(|frame| view(frame, &state));
//! assert!(term.buffer_contains("Preferences"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// A classic 80x24 screen
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    pub fn draw_with<F: FnOnce(&mut Frame)>(&mut self, draw: F) {
        self.terminal.draw(draw).expect("draw into test backend");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Text of every row. Wide glyphs keep their trailing blank cell.
    pub fn rows(&self) -> Vec<String> {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    /// Whether `text` appears within a single row
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.rows().iter().any(|row| row.contains(text))
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.rows()
            .get(usize::from(line))
            .is_some_and(|row| row.contains(text))
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        let inside = x < buffer.area.width && y < buffer.area.height;
        inside.then(|| buffer[(x, y)].symbol())
    }

    /// The screen as one string, handy in assertion messages
    pub fn content(&self) -> String {
        self.rows().join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_default_size() {
        let term = TestTerminal::new();
        assert_eq!((term.area().width, term.area().height), (80, 24));
    }

    #[test]
    fn test_text_queries() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Acme Console"), term.area());

        assert!(term.buffer_contains("Acme Console"));
        assert!(!term.buffer_contains("Settings"));
        assert!(term.line_contains(0, "Acme"));
        assert!(!term.line_contains(1, "Acme"));
        assert!(!term.line_contains(9, "Acme"));
        assert_eq!(term.cell_at(0, 0), Some("A"));
        assert_eq!(term.cell_at(20, 0), None);
        assert_eq!(term.content().lines().count(), 3);
    }
}
