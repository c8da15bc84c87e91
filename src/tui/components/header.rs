//! # Header Component
//!
//! Static title and tagline. No props, no state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const TITLE: &str = "FakeReal Detector";
pub const TAGLINE: &str =
    "Combat misinformation: paste news text for instant analysis.";

pub struct Header;

impl Header {
    /// Title, tagline, blank spacer.
    pub const HEIGHT: u16 = 3;
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray))),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
