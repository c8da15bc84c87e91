pub mod client;
pub mod http;
pub mod types;

pub use client::{Classifier, ClassifierError, classify_or_fallback};
pub use http::HttpClassifier;
pub use types::{
    AlgorithmScore, Attribution, Comparison, Label, PredictionResult, display_number,
};
