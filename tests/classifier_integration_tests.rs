use std::sync::Arc;

use fakereal::classifier::{
    Classifier, ClassifierError, HttpClassifier, Label, PredictionResult, classify_or_fallback,
};
use fakereal::core::action::{Action, Effect, update};
use fakereal::core::state::App;
use fakereal::tui::Component;
use fakereal::tui::components::ResultCard;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use serde_json::{Number, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn comparison_body() -> serde_json::Value {
    json!({
        "prediction": "Real",
        "confidence": 97,
        "explanation": "Matches verified sources",
        "best_algorithm": "Random Forest",
        "comparison": {
            "decision_tree": {"prediction": "Real", "confidence": 91},
            "random_forest": {"prediction": "Real", "confidence": 97}
        }
    })
}

/// Base URL of a port nothing is listening on.
fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Drives one full submit → classify → settle cycle, as the event loop does.
async fn submit_and_settle(app: &mut App) {
    let Effect::SpawnRequest { generation, text } = update(app, Action::Submit) else {
        panic!("Expected SpawnRequest");
    };
    assert!(app.loading);
    assert!(app.result.is_none());

    let result = classify_or_fallback(app.classifier.as_ref(), &text).await;
    update(app, Action::ResponseSettled { generation, result });
}

fn render_result(result: Option<&PredictionResult>) -> Vec<String> {
    let backend = TestBackend::new(70, 14);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| ResultCard::new(result).render(f, f.area()))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect()
}

// ============================================================================
// Wire Contract
// ============================================================================

#[tokio::test]
async fn test_predict_posts_json_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"text": "  raw input\n"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(comparison_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let classifier = HttpClassifier::new(mock_server.uri());
    let result = classifier.predict("  raw input\n").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_single_algorithm_variant() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prediction": "Fake",
            "confidence": 88.5,
            "explanation": "Sensational wording",
            "algorithm": "Decision Tree"
        })))
        .mount(&mock_server)
        .await;

    let classifier = HttpClassifier::new(mock_server.uri());
    let result = classifier.predict("text").await.unwrap();

    assert_eq!(result.label, Label::Fake);
    assert_eq!(result.confidence_text(), "88.5%");
    assert_eq!(result.attribution.algorithm(), "Decision Tree");
    assert!(result.attribution.comparison().is_none());
}

#[tokio::test]
async fn test_api_error_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Text cannot be empty"))
        .mount(&mock_server)
        .await;

    let classifier = HttpClassifier::new(mock_server.uri());
    let err = classifier.predict("x").await.unwrap_err();

    match err {
        ClassifierError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Text cannot be empty");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let classifier = HttpClassifier::new(mock_server.uri());
    let err = classifier.predict("x").await.unwrap_err();
    assert!(matches!(err, ClassifierError::Parse(_)));

    // ...and still folds into the standard error result
    let result = classify_or_fallback(&classifier, "x").await;
    assert_eq!(result, PredictionResult::request_failed());
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let classifier = HttpClassifier::new(refused_base_url());
    let err = classifier.predict("x").await.unwrap_err();
    assert!(matches!(err, ClassifierError::Network(_)));
}

#[tokio::test]
async fn test_health_returns_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Fake News Detector API is running!"})),
        )
        .mount(&mock_server)
        .await;

    let classifier = HttpClassifier::new(mock_server.uri());
    assert_eq!(
        classifier.health().await.unwrap(),
        "Fake News Detector API is running!"
    );
}

// ============================================================================
// Controller Properties
// ============================================================================

#[tokio::test]
async fn test_error_normalization_across_causes() {
    let mut outcomes = Vec::new();

    for status in [400u16, 404, 500] {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .mount(&mock_server)
            .await;

        let mut app = App::new(Arc::new(HttpClassifier::new(mock_server.uri())));
        app.text = "headline".to_string();
        submit_and_settle(&mut app).await;
        assert!(!app.loading);
        outcomes.push(app.result.unwrap());
    }

    let mut app = App::new(Arc::new(HttpClassifier::new(refused_base_url())));
    app.text = "headline".to_string();
    submit_and_settle(&mut app).await;
    assert!(!app.loading);
    outcomes.push(app.result.unwrap());

    assert_eq!(outcomes.len(), 4);
    for outcome in &outcomes {
        assert_eq!(outcome, &PredictionResult::request_failed());
        assert_eq!(outcome.label.as_str(), "Error");
        assert_eq!(outcome.confidence, Number::from(0));
        assert_eq!(outcome.explanation, "Check backend server or try again!");
        assert_eq!(outcome.attribution.algorithm(), "N/A");
    }
}

#[tokio::test]
async fn test_blank_submit_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(comparison_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut app = App::new(Arc::new(HttpClassifier::new(mock_server.uri())));
    for text in ["", "   ", "\n\t"] {
        update(&mut app, Action::TextChanged(text.to_string()));
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert!(!app.loading);
        assert!(app.result.is_none());
    }
    // MockServer verifies expect(0) on drop
}

#[tokio::test]
async fn test_consecutive_results_replace_wholesale() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"text": "first"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(comparison_body()))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"text": "second"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prediction": "Fake",
            "confidence": 64,
            "explanation": "Unverified claims",
            "algorithm": "Decision Tree"
        })))
        .mount(&mock_server)
        .await;

    let mut app = App::new(Arc::new(HttpClassifier::new(mock_server.uri())));

    update(&mut app, Action::TextChanged("first".to_string()));
    submit_and_settle(&mut app).await;
    assert!(app.result.as_ref().unwrap().attribution.comparison().is_some());

    update(&mut app, Action::TextChanged("second".to_string()));
    submit_and_settle(&mut app).await;

    let result = app.result.unwrap();
    assert_eq!(result.label, Label::Fake);
    assert_eq!(result.explanation, "Unverified claims");
    assert_eq!(result.attribution.algorithm(), "Decision Tree");
    assert!(result.attribution.comparison().is_none());
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"text": "UN climate agreement approved"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(comparison_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = App::new(Arc::new(HttpClassifier::new(mock_server.uri())));
    update(
        &mut app,
        Action::TextChanged("UN climate agreement approved".to_string()),
    );
    submit_and_settle(&mut app).await;

    assert!(!app.loading);
    let result = app.result.as_ref().unwrap();
    assert_eq!(result.label, Label::Real);
    assert_eq!(result.confidence_text(), "97%");

    let rows = render_result(Some(result));
    let screen = rows.join("\n");
    assert!(screen.contains("Real"));
    assert!(screen.contains("Confidence: 97%"));

    let decision_tree = rows.iter().find(|r| r.contains("Decision Tree")).unwrap();
    assert!(decision_tree.contains("91%"));
    let random_forest = rows
        .iter()
        .find(|r| r.contains("Random Forest") && !r.contains("Algorithm Used"))
        .unwrap();
    assert!(random_forest.contains("97%"));
}

#[tokio::test]
async fn test_whole_float_confidences_render_without_fraction() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prediction": "Uncertain",
            "confidence": 0.0,
            "explanation": "Models disagree",
            "best_algorithm": "Random Forest",
            "comparison": {
                "decision_tree": {"prediction": "Real", "confidence": 91.0},
                "random_forest": {"prediction": "Fake", "confidence": 97.0}
            }
        })))
        .mount(&mock_server)
        .await;

    let classifier = HttpClassifier::new(mock_server.uri());
    let result = classify_or_fallback(&classifier, "x").await;
    assert_eq!(result.confidence_text(), "0%");

    let rows = render_result(Some(&result));
    assert!(rows.iter().any(|r| r.contains("Confidence: 0%")));
    let decision_tree = rows.iter().find(|r| r.contains("Decision Tree")).unwrap();
    assert!(decision_tree.contains("91%"));
    assert!(!decision_tree.contains("91.0%"));
}

#[tokio::test]
async fn test_missing_decision_tree_renders_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prediction": "Real",
            "confidence": 97,
            "explanation": "ok",
            "best_algorithm": "Random Forest",
            "comparison": {
                "random_forest": {"prediction": "Real", "confidence": 97}
            }
        })))
        .mount(&mock_server)
        .await;

    let classifier = HttpClassifier::new(mock_server.uri());
    let result = classify_or_fallback(&classifier, "x").await;

    let rows = render_result(Some(&result));
    let decision_tree = rows.iter().find(|r| r.contains("Decision Tree")).unwrap();
    assert!(decision_tree.contains("N/A"));
    assert!(decision_tree.contains("0%"));
}
