//! # One-shot Mode
//!
//! Classifies a single text without starting the TUI and prints a plain-text
//! summary. Drives the same `update()` cycle as the interactive UI, awaiting
//! the request inline instead of through the event loop channel.

use log::info;

use crate::classifier::{PredictionResult, classify_or_fallback, display_number};
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;

/// Runs submit → classify → settle once for `text`.
///
/// Returns `None` without touching the network when `text` is blank.
pub async fn run_once(app: &mut App, text: String) -> Option<&PredictionResult> {
    update(app, Action::TextChanged(text));

    let (generation, text) = match update(app, Action::Submit) {
        Effect::SpawnRequest { generation, text } => (generation, text),
        _ => {
            info!("One-shot input was blank, nothing submitted");
            return None;
        }
    };

    let result = classify_or_fallback(app.classifier.as_ref(), &text).await;
    update(app, Action::ResponseSettled { generation, result });
    app.result.as_ref()
}

/// Plain-text rendering of a result, one line per field.
pub fn summary_lines(result: &PredictionResult) -> Vec<String> {
    let mut lines = vec![
        format!("Prediction: {}", result.label),
        format!("Confidence: {}", result.confidence_text()),
        format!("Explanation: {}", result.explanation),
        format!("Algorithm Used: {}", result.attribution.algorithm()),
    ];

    if let Some(comparison) = result.attribution.comparison() {
        for (name, score) in comparison.rows() {
            lines.push(format!(
                "  {name}: {} ({}%)",
                score.prediction,
                display_number(&score.confidence)
            ));
        }
    }
    lines
}
