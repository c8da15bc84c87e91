//! # TitleBar Component
//!
//! One-line status bar at the top of the screen.
//!
//! Purely presentational: it receives all data as props and keeps no state.
//!
//! The text changes based on state:
//!
//! 1. **Status message**: `"FakeReal (http://localhost:8000) | Analyzing..."`
//! 2. **Default**: `"FakeReal (http://localhost:8000)"`
//!
//! A key hint is right-aligned when the terminal is wide enough.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINT: &str = "Enter: detect  Ctrl+J: newline  Esc: quit";

/// Top status bar component.
///
/// # Props
///
/// - `endpoint`: Base URL of the classification service
/// - `status_message`: Transient status (e.g. "Analyzing...")
pub struct TitleBar {
    pub endpoint: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String) -> Self {
        Self {
            endpoint,
            status_message,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("FakeReal ({})", self.endpoint)
        } else {
            format!("FakeReal ({}) | {}", self.endpoint, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = self.title_text();
        frame.render_widget(Span::raw(title_text.as_str()), area);

        // Only show the hint if it fits beside the title with a gap
        let needed = title_text.width() + KEY_HINT.width() + 2;
        if needed <= area.width as usize {
            let hint = Paragraph::new(Span::styled(KEY_HINT, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right);
            frame.render_widget(hint, area);
        }
    }
}
