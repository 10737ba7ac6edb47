//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widget and full-screen tests can render
//! into an in-memory buffer and assert on its text.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(MainHeader::new(&list), term.area());
//! assert!(term.buffer_contains("Skincare Journal"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

use journal_app::config::Settings;
use journal_app::state::AppState;
use journal_client::test_utils::{test_page, test_product};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing small layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test wrapper around a TestBackend terminal.
///
/// Use `render_widget` for single widgets and `draw_with` for full frames
/// such as `render::view`.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 40x12
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("Failed to render stateful widget");
    }

    /// Draw a frame with a custom rendering function
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere (within one row)
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|&y| get_line_content(buffer, y).contains(text))
    }

    /// All content as a string (for debugging failed assertions)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState with default settings and nothing loaded
pub fn create_test_state() -> AppState {
    AppState::with_settings(Settings::default())
}

/// AppState whose first page has been applied with `names`
pub fn create_loaded_state(names: &[&str], total_pages: u32) -> AppState {
    let mut state = create_test_state();
    let products = names
        .iter()
        .enumerate()
        .map(|(i, name)| test_product(i as i64 + 1, name))
        .collect::<Vec<_>>();
    let total = products.len() as u64;
    if let Some(req) = state.list.initialize() {
        state
            .list
            .apply_page(req.ticket, test_page(1, products, total, total_pages));
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_sizes() {
        let term = TestTerminal::new();
        assert_eq!((term.area().width, term.area().height), (TEST_WIDTH, TEST_HEIGHT));

        let term = TestTerminal::compact();
        assert_eq!(
            (term.area().width, term.area().height),
            (COMPACT_WIDTH, COMPACT_HEIGHT)
        );
    }

    #[test]
    fn test_buffer_to_string_has_one_line_per_row() {
        let backend = TestBackend::new(5, 2);
        assert_eq!(buffer_to_string(backend.buffer()).lines().count(), 2);
    }

    #[test]
    fn test_find_line() {
        let mut term = TestTerminal::with_size(20, 3);
        term.draw_with(|frame| {
            frame.render_widget(ratatui::widgets::Paragraph::new("\nhello"), frame.area())
        });
        assert_eq!(term.find_line("hello"), Some(1));
        assert!(term.line_contains(1, "hello"));
        assert_eq!(term.find_line("absent"), None);
    }

    #[test]
    fn test_loaded_state_has_products() {
        let state = create_loaded_state(&["A", "B"], 2);
        assert_eq!(state.list.items.len(), 2);
        assert!(state.list.has_more);
    }
}
