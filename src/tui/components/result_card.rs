//! # ResultCard Component
//!
//! Pure rendering of the last prediction. `None` renders nothing at all.
//!
//! ```text
//! ┌ Result ───────────────────────────────────┐
//! │ ✅ Real                                   │
//! │ Confidence: 97%                           │
//! │ Matches verified sources                  │
//! │ Algorithm Used: Random Forest             │
//! │                                           │
//! │ Algorithm       Prediction   Confidence   │  ← only for comparison results
//! │ Decision Tree   Real         91%          │
//! │ Random Forest   Real         97%          │
//! └───────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Row, Table, Wrap};

use crate::classifier::{Comparison, Label, PredictionResult, display_number};
use crate::tui::component::Component;

/// Icon and color for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treatment {
    pub icon: &'static str,
    pub color: Color,
}

/// Neutral treatment for labels outside the known set.
pub const NEUTRAL: Treatment = Treatment {
    icon: "⚠️",
    color: Color::Gray,
};

/// Visual treatment for a label. Infallible: unknown labels get `NEUTRAL`.
pub fn treatment(label: &Label) -> Treatment {
    match label {
        Label::Fake => Treatment {
            icon: "🚨",
            color: Color::Red,
        },
        Label::Real => Treatment {
            icon: "✅",
            color: Color::Green,
        },
        Label::Uncertain => Treatment {
            icon: "❓",
            color: Color::Yellow,
        },
        Label::Error => Treatment {
            icon: "⚠️",
            color: Color::Red,
        },
        Label::Other(_) => NEUTRAL,
    }
}

/// Rows of the comparison table: name, prediction, confidence text.
pub fn comparison_rows(comparison: &Comparison) -> Vec<[String; 3]> {
    comparison
        .rows()
        .into_iter()
        .map(|(name, score)| {
            [
                name.to_string(),
                score.prediction.clone(),
                format!("{}%", display_number(&score.confidence)),
            ]
        })
        .collect()
}

/// Result summary card.
///
/// # Props
///
/// - `result`: The last settled prediction, if any
pub struct ResultCard<'a> {
    pub result: Option<&'a PredictionResult>,
}

impl<'a> ResultCard<'a> {
    /// Header row plus two algorithm rows, plus one spacer line above.
    const TABLE_HEIGHT: u16 = 4;

    pub fn new(result: Option<&'a PredictionResult>) -> Self {
        Self { result }
    }

    /// Rows needed to show the whole card at `width`, borders included.
    /// Zero when there is no result.
    pub fn height(&self, width: u16) -> u16 {
        let Some(result) = self.result else {
            return 0;
        };
        let Treatment { icon, color } = treatment(&result.label);
        let inner_width = width.saturating_sub(2);
        let summary = Self::summary(result, color, icon).line_count(inner_width) as u16;
        let table = match result.attribution.comparison() {
            Some(_) => Self::TABLE_HEIGHT,
            None => 0,
        };
        summary + table + 2
    }

    fn summary(result: &PredictionResult, color: Color, icon: &str) -> Paragraph<'static> {
        Paragraph::new(Self::summary_lines(result, color, icon)).wrap(Wrap { trim: true })
    }

    fn summary_lines(result: &PredictionResult, color: Color, icon: &str) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::raw(format!("{icon} ")),
                Span::styled(
                    result.label.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("Confidence: "),
                Span::styled(
                    result.confidence_text(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                result.explanation.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(vec![
                Span::styled("Algorithm Used: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    result.attribution.algorithm().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ]
    }

    fn comparison_table(comparison: &Comparison) -> Table<'static> {
        let header = Row::new(["Algorithm", "Prediction", "Confidence"])
            .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
        let rows = comparison_rows(comparison).into_iter().map(Row::new);

        Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(12),
                Constraint::Length(12),
            ],
        )
        .header(header)
    }
}

impl Component for ResultCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(result) = self.result else {
            return;
        };

        let Treatment { icon, color } = treatment(&result.label);
        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(color))
            .title("Result");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let summary = Self::summary(result, color, icon);

        match result.attribution.comparison() {
            Some(comparison) => {
                // The table keeps its rows; the summary takes what is left
                let summary_height = (summary.line_count(inner.width) as u16)
                    .min(inner.height.saturating_sub(Self::TABLE_HEIGHT));
                let [summary_area, table_area, _] = Layout::vertical([
                    Constraint::Length(summary_height),
                    Constraint::Length(Self::TABLE_HEIGHT),
                    Constraint::Min(0),
                ])
                .areas(inner);
                frame.render_widget(summary, summary_area);

                let [_, table_area] =
                    Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(table_area);
                frame.render_widget(Self::comparison_table(comparison), table_area);
            }
            None => frame.render_widget(summary, inner),
        }
    }
}
