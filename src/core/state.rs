//! # Application State
//!
//! Core business state for FakeReal. Domain logic only, no TUI types.
//! Presentation state (cursor position, etc.) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── classifier: Arc<dyn Classifier>   // remote prediction service
//! ├── text: String                      // current input, kept across submits
//! ├── loading: bool                     // request in flight
//! ├── result: Option<PredictionResult>  // last settled outcome
//! ├── generation: u64                   // id of the latest submission
//! └── status_message: String            // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::classifier::{Classifier, PredictionResult};

pub const READY_STATUS: &str = "Ready";
pub const ANALYZING_STATUS: &str = "Analyzing...";

pub struct App {
    pub classifier: Arc<dyn Classifier>,
    pub text: String,
    pub loading: bool,
    pub result: Option<PredictionResult>,
    /// Bumped on every accepted submission. Settlements tagged with an older
    /// value are dropped.
    pub generation: u64,
    pub status_message: String,
}

impl App {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier,
            text: String::new(),
            loading: false,
            result: None,
            generation: 0,
            status_message: String::from(READY_STATUS),
        }
    }

    /// Submit is disabled while a request is in flight or the input is blank.
    pub fn submit_disabled(&self) -> bool {
        self.loading || self.text.trim().is_empty()
    }
}
