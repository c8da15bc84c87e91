//! # Actions
//!
//! Everything that can happen in FakeReal becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The classifier answers? That's `Action::ResponseSettled { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any I/O the caller should start.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::classifier::PredictionResult;
use crate::core::state::{ANALYZING_STATUS, App, READY_STATUS};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Input text was edited. Carries the full new value.
    TextChanged(String),
    /// User asked to classify the current text.
    Submit,
    /// The request for `generation` finished, one way or the other.
    ResponseSettled {
        generation: u64,
        result: PredictionResult,
    },
    /// Startup probe of the service root finished.
    HealthChecked(Result<String, String>),
    Quit,
}

/// I/O the caller must perform after `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Send `text` to the classifier and report back with `generation`.
    SpawnRequest { generation: u64, text: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::TextChanged(text) => {
            app.text = text;
            Effect::None
        }
        Action::Submit => {
            if app.text.trim().is_empty() {
                debug!("Submit ignored: input is blank");
                return Effect::None;
            }
            if app.loading {
                debug!("Submit ignored: request {} still in flight", app.generation);
                return Effect::None;
            }

            app.loading = true;
            app.result = None;
            app.generation += 1;
            app.status_message = ANALYZING_STATUS.to_string();
            info!("Submitting request {}", app.generation);

            Effect::SpawnRequest {
                generation: app.generation,
                text: app.text.clone(),
            }
        }
        Action::ResponseSettled { generation, result } => {
            if generation != app.generation {
                warn!(
                    "Dropping stale response for request {} (current is {})",
                    generation, app.generation
                );
                return Effect::None;
            }

            info!("Request {} settled: {}", generation, result.label);
            app.result = Some(result);
            app.loading = false;
            app.status_message = READY_STATUS.to_string();
            Effect::None
        }
        Action::HealthChecked(outcome) => {
            let message = match outcome {
                Ok(message) => message,
                Err(e) => format!("Backend unreachable: {e}"),
            };
            // "Analyzing..." stays up until the request settles
            if app.loading {
                debug!("Health check settled mid-request: {}", message);
            } else {
                app.status_message = message;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
