//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Lifecycle
//!
//! ```text
//! Enter ─▶ FormEvent::Submit ─▶ update(Submit) ─▶ Effect::SpawnRequest
//!                                                        │
//!                                     tokio task: classify_or_fallback
//!                                                        │
//!            update(ResponseSettled) ◀── mpsc channel ◀──┘
//! ```
//!
//! The channel receiver lives in the event loop. Once the loop exits the
//! receiver is dropped, so a request that settles afterwards fails to send
//! and its result is discarded instead of touching torn-down state.
//!
//! ## Redraw Strategy
//!
//! Draws only after an event or a settled request, except while loading,
//! when the loop ticks every ~100ms so the status stays fresh.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::classifier::{Classifier, classify_or_fallback};
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, InputForm};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub use component::Component;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_form: InputForm,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_form: InputForm::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Runs the interactive UI until the user quits.
///
/// Must be called from within a tokio runtime: requests are spawned onto it.
pub fn run(classifier: Arc<dyn Classifier>) -> std::io::Result<()> {
    let mut app = App::new(classifier);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    spawn_health_check(app.classifier.clone(), tx.clone());

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if app.loading {
            needs_redraw = true;
        }

        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if app.loading {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit => Action::Quit,
                other => match tui.input_form.handle_event(&other) {
                    Some(FormEvent::Changed(text)) => Action::TextChanged(text),
                    Some(FormEvent::Submit) => Action::Submit,
                    None => continue,
                },
            };

            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnRequest { generation, text } => {
                    spawn_request(app.classifier.clone(), generation, text, tx.clone());
                }
                Effect::None => {}
            }

            // Keep the controlled form in step before the next drained event
            tui.input_form
                .set_props(&app.text, app.loading, app.submit_disabled());
        }

        if should_quit {
            break Ok(());
        }

        // Handle background task actions (settled requests, health probe)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut app, action);
        }
    };

    ratatui::restore();
    info!("FakeReal shutting down");
    result
}

/// Spawns the classification request for `generation`.
///
/// Every outcome, success or failure, comes back as `ResponseSettled`.
fn spawn_request(
    classifier: Arc<dyn Classifier>,
    generation: u64,
    text: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning classification request {}", generation);
    tokio::spawn(async move {
        let result = classify_or_fallback(classifier.as_ref(), &text).await;
        if tx
            .send(Action::ResponseSettled { generation, result })
            .is_err()
        {
            warn!(
                "Request {} settled after the UI closed; result discarded",
                generation
            );
        }
    });
}

fn spawn_health_check(classifier: Arc<dyn Classifier>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let outcome = classifier.health().await.map_err(|e| e.to_string());
        match &outcome {
            Ok(message) => info!("Health check ok: {}", message),
            Err(e) => warn!("Health check failed: {}", e),
        }
        if tx.send(Action::HealthChecked(outcome)).is_err() {
            debug!("Health check finished after the UI closed");
        }
    });
}
