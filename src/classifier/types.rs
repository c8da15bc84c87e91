//! Prediction types.
//!
//! Two layers live here:
//!
//! - **Wire types** (`PredictRequest`, `RawPrediction`, `RawScore`): the JSON the
//!   classification service speaks. Optional fields stay optional.
//! - **Domain types** (`PredictionResult`, `Attribution`, `Comparison`): what the
//!   rest of the app works with. Defaults are filled in exactly once, in
//!   `PredictionResult::from(RawPrediction)`.
//!
//! ```text
//! RawPrediction ──normalize──▶ PredictionResult
//!                                ├── label: Label
//!                                ├── confidence: Number
//!                                ├── explanation: String
//!                                └── attribution
//!                                     ├── Single { algorithm }
//!                                     └── Compared { best_algorithm, comparison }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Placeholder shown wherever the service gave us nothing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Explanation used for every failed request, whatever the cause.
pub const REQUEST_FAILED_EXPLANATION: &str = "Check backend server or try again!";

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /predict`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

/// Body of a successful `/predict` response, as sent.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RawPrediction {
    pub prediction: String,
    pub confidence: Number,
    pub explanation: String,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub best_algorithm: Option<String>,
    #[serde(default)]
    pub comparison: Option<RawComparison>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RawComparison {
    #[serde(default)]
    pub decision_tree: Option<RawScore>,
    #[serde(default)]
    pub random_forest: Option<RawScore>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RawScore {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<Number>,
}

/// Body of `GET /`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub message: String,
}

// ============================================================================
// Domain Types
// ============================================================================

/// A number as a browser would print it: `97.0` shows as `97`, `88.5` stays.
///
/// The service rounds confidences to one decimal, so whole values arrive as
/// floats.
pub fn display_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Headline verdict. Unknown strings are kept, not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Real,
    Fake,
    Uncertain,
    Error,
    Other(String),
}

impl Label {
    pub fn as_str(&self) -> &str {
        match self {
            Label::Real => "Real",
            Label::Fake => "Fake",
            Label::Uncertain => "Uncertain",
            Label::Error => "Error",
            Label::Other(s) => s,
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        match s {
            "Real" => Label::Real,
            "Fake" => Label::Fake,
            "Uncertain" => Label::Uncertain,
            "Error" => Label::Error,
            other => Label::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One algorithm's verdict inside a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmScore {
    pub prediction: String,
    pub confidence: Number,
}

impl Default for AlgorithmScore {
    fn default() -> Self {
        Self {
            prediction: NOT_AVAILABLE.to_string(),
            confidence: Number::from(0),
        }
    }
}

impl From<RawScore> for AlgorithmScore {
    fn from(raw: RawScore) -> Self {
        let fallback = AlgorithmScore::default();
        Self {
            prediction: raw.prediction.unwrap_or(fallback.prediction),
            confidence: raw.confidence.unwrap_or(fallback.confidence),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparison {
    pub decision_tree: AlgorithmScore,
    pub random_forest: AlgorithmScore,
}

impl Comparison {
    /// Rows in display order.
    pub fn rows(&self) -> [(&'static str, &AlgorithmScore); 2] {
        [
            ("Decision Tree", &self.decision_tree),
            ("Random Forest", &self.random_forest),
        ]
    }
}

impl From<RawComparison> for Comparison {
    fn from(raw: RawComparison) -> Self {
        Self {
            decision_tree: raw.decision_tree.map(Into::into).unwrap_or_default(),
            random_forest: raw.random_forest.map(Into::into).unwrap_or_default(),
        }
    }
}

/// Which algorithm(s) stand behind the headline prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribution {
    Single {
        algorithm: String,
    },
    Compared {
        best_algorithm: String,
        comparison: Comparison,
    },
}

impl Attribution {
    pub fn algorithm(&self) -> &str {
        match self {
            Attribution::Single { algorithm } => algorithm,
            Attribution::Compared { best_algorithm, .. } => best_algorithm,
        }
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        match self {
            Attribution::Single { .. } => None,
            Attribution::Compared { comparison, .. } => Some(comparison),
        }
    }
}

/// A fully normalized prediction, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: Label,
    pub confidence: Number,
    pub explanation: String,
    pub attribution: Attribution,
}

impl PredictionResult {
    /// The one result shown for every failed request.
    pub fn request_failed() -> Self {
        Self {
            label: Label::Error,
            confidence: Number::from(0),
            explanation: REQUEST_FAILED_EXPLANATION.to_string(),
            attribution: Attribution::Single {
                algorithm: NOT_AVAILABLE.to_string(),
            },
        }
    }

    /// Confidence as displayed, e.g. `"97%"`.
    pub fn confidence_text(&self) -> String {
        format!("{}%", display_number(&self.confidence))
    }
}

impl From<RawPrediction> for PredictionResult {
    fn from(raw: RawPrediction) -> Self {
        // best_algorithm wins over algorithm in both variants
        let algorithm = raw
            .best_algorithm
            .or(raw.algorithm)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let attribution = match raw.comparison {
            Some(comparison) => Attribution::Compared {
                best_algorithm: algorithm,
                comparison: comparison.into(),
            },
            None => Attribution::Single { algorithm },
        };

        Self {
            label: Label::from(raw.prediction.as_str()),
            confidence: raw.confidence,
            explanation: raw.explanation,
            attribution,
        }
    }
}
