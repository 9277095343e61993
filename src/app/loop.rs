use crate::app::{
    action::Action, dispatch::handle_command, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::models::SessionOutcome;
use crate::domain::services::TextService;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const EVENT_POLL: Duration = Duration::from_millis(100);

/// What the session left behind once the menu closed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionEnd {
    pub outcome: SessionOutcome,
    pub failure: Option<String>,
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    service: Arc<dyn TextService>,
) -> Result<SessionEnd> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || {
        // Poll instead of blocking on read so the reader notices the loop is gone.
        while !event_tx.is_closed() {
            match event::poll(EVENT_POLL) {
                Ok(false) => {}
                Ok(true) => {
                    let res = event::read();
                    let failed = res.is_err();
                    if event_tx.blocking_send(res).is_err() || failed {
                        break;
                    }
                }
                Err(e) => {
                    // Nobody left to report to if the loop already closed.
                    let _ = event_tx.blocking_send(Err(e));
                    break;
                }
            }
        }
    });

    run_loop_with_events(terminal, app_state, service, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    service: Arc<dyn TextService>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<SessionEnd> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // crossterm only reports later resizes.
    let size = terminal.size()?;
    reducer::update(&mut app_state, Action::Resize(size.width, size.height));

    while !app_state.is_closed() {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Some(cmd) = reducer::update(&mut app_state, action) {
                handle_command(cmd, service.clone(), action_tx.clone());
            }
        }
    }

    Ok(SessionEnd {
        outcome: app_state.outcome,
        failure: app_state.failure,
    })
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
