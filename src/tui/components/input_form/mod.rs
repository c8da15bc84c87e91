//! # InputForm Component
//!
//! Text area plus submit button. A controlled component: the text is a prop
//! owned by the core `App`, and every edit is reported upward as
//! `FormEvent::Changed` carrying the complete new value.
//!
//! ## Responsibilities
//!
//! - Render the text area (read-only while a request is in flight)
//! - Translate editing keys into `Changed(new_text)`, no debouncing
//! - Emit `Submit` on Enter unless `disabled`
//! - Render the button label for the loading / idle states
//!
//! ## State Management
//!
//! `text`, `loading` and `disabled` are props, synced from `App` by the event
//! loop after every action. The form does not validate anything itself: the
//! caller computes `disabled` (see `App::submit_disabled`).
//! The cursor byte offset is the only internal state.

mod text_wrap;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use text_wrap::{
    BORDER_OFFSET, BUTTON_HEIGHT, TEXT_AREA_LINES, VERTICAL_OVERHEAD, clamp_to_boundary,
    cursor_row_col, inner_width, next_char_boundary, prev_char_boundary, wrapped_lines,
};

pub const PLACEHOLDER: &str = "Paste a full news article or headline here \
    (e.g., 'UN climate agreement approved...') for best results.";
pub const SUBMIT_LABEL: &str = "🚀 Detect Fake News";
pub const LOADING_LABEL: &str = "🔍 Analyzing...";

/// High-level events emitted by the InputForm
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Text was edited; carries the full new value.
    Changed(String),
    /// User pressed Enter while the button was enabled.
    Submit,
}

/// Text area + submit button.
///
/// # Props
///
/// - `text`: Current input (from App state)
/// - `loading`: Request in flight; makes the text area read-only
/// - `disabled`: Submit is inert
pub struct InputForm {
    pub text: String,
    pub loading: bool,
    pub disabled: bool,
    /// Cursor position as byte offset into `text`
    cursor: usize,
}

impl InputForm {
    /// Rows used by the form when the terminal has room.
    pub const HEIGHT: u16 = TEXT_AREA_LINES + VERTICAL_OVERHEAD + BUTTON_HEIGHT;
    /// Smallest usable form: one visible text line.
    pub const MIN_HEIGHT: u16 = 1 + VERTICAL_OVERHEAD + BUTTON_HEIGHT;

    pub fn new() -> Self {
        Self {
            text: String::new(),
            loading: false,
            disabled: true,
            cursor: 0,
        }
    }

    /// Sync props from the owner. The cursor is clamped to the new text.
    pub fn set_props(&mut self, text: &str, loading: bool, disabled: bool) {
        if self.text != text {
            self.text = text.to_string();
            self.cursor = clamp_to_boundary(&self.text, self.cursor);
        }
        self.loading = loading;
        self.disabled = disabled;
    }

    fn edited(&mut self, new_text: String, new_cursor: usize) -> Option<FormEvent> {
        self.cursor = new_cursor;
        Some(FormEvent::Changed(new_text))
    }

    fn render_text_area(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("News text");

        let (border_style, text_style) = if self.loading {
            let dim = Style::default().fg(Color::DarkGray);
            (dim, dim)
        } else {
            (Style::default().fg(Color::Blue), Style::default())
        };
        let block = block.border_style(border_style);
        let visible_lines = area.height.saturating_sub(VERTICAL_OVERHEAD).max(1);

        if self.text.is_empty() {
            let placeholder = Paragraph::new(PLACEHOLDER)
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(ratatui::widgets::Wrap { trim: true });
            frame.render_widget(placeholder, area);
        } else {
            let width = inner_width(area.width);
            let lines = wrapped_lines(&self.text, width);
            let (cursor_row, _) = cursor_row_col(&self.text, self.cursor, width);
            let scroll = cursor_row.saturating_sub(visible_lines - 1) as usize;
            let end = (scroll + visible_lines as usize).min(lines.len());
            let visible = lines[scroll.min(end)..end].join("\n");

            frame.render_widget(Paragraph::new(visible).block(block).style(text_style), area);
        }

        // No cursor while read-only
        if !self.loading {
            let width = inner_width(area.width);
            let (row, col) = cursor_row_col(&self.text, self.cursor, width);
            let row = row.min(visible_lines - 1);
            frame.set_cursor_position((
                area.x + BORDER_OFFSET + col,
                area.y + BORDER_OFFSET + row,
            ));
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let label = if self.loading { LOADING_LABEL } else { SUBMIT_LABEL };
        let style = if self.disabled {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_type(BorderType::Rounded))
            .style(style);
        frame.render_widget(button, area);
    }
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor = clamp_to_boundary(&self.text, self.cursor);
        // The text area gives up lines first when the form is squeezed
        let [text_area, button_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(area);

        self.render_text_area(frame, text_area);
        self.render_button(frame, button_area);
    }
}

impl EventHandler for InputForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        self.cursor = clamp_to_boundary(&self.text, self.cursor);
        let pos = self.cursor;

        match event {
            TuiEvent::Submit => (!self.disabled).then_some(FormEvent::Submit),
            // Read-only while loading: swallow every edit
            _ if self.loading => None,
            TuiEvent::InputChar(c) => {
                let mut text = self.text.clone();
                text.insert(pos, *c);
                self.edited(text, pos + c.len_utf8())
            }
            TuiEvent::Paste(pasted) => {
                let mut text = self.text.clone();
                text.insert_str(pos, pasted);
                self.edited(text, pos + pasted.len())
            }
            TuiEvent::Backspace => {
                if pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.text, pos);
                let mut text = self.text.clone();
                text.drain(prev..pos);
                self.edited(text, prev)
            }
            TuiEvent::Delete => {
                if pos >= self.text.len() {
                    return None;
                }
                let next = next_char_boundary(&self.text, pos);
                let mut text = self.text.clone();
                text.drain(pos..next);
                self.edited(text, pos)
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.text, pos);
                None
            }
            TuiEvent::CursorRight => {
                if pos < self.text.len() {
                    self.cursor = next_char_boundary(&self.text, pos);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.text[pos..]
                    .find('\n')
                    .map(|i| pos + i)
                    .unwrap_or(self.text.len());
                None
            }
            _ => None,
        }
    }
}
