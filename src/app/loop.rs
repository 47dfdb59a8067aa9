use crate::app::{
    action::Action,
    command::Command,
    features::library::PendingTasks,
    input::map_event_to_action,
    reducer,
    state::AppState,
    ui,
};
use crate::domain::library::LibraryFacade;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    library: Arc<dyn LibraryFacade>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, library, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    library: Arc<dyn LibraryFacade>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    let mut tasks = PendingTasks::default();

    // Initial connection
    if let Some(profile) = app_state.active_server.clone() {
        if let Some(cmd) = reducer::update(&mut app_state, Action::SwitchServer(profile)) {
            handle_command(cmd, library.clone(), action_tx.clone(), &mut tasks)?;
        }
    }

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res.context("Failed to read terminal event")?;
                map_event_to_action(event, &app_state)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, library.clone(), action_tx.clone(), &mut tasks)?;
            }
        }
    }

    tasks.cancel_all();
    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    library: Arc<dyn LibraryFacade>,
    tx: mpsc::Sender<Action>,
    tasks: &mut PendingTasks,
) -> Result<()> {
    tracing::trace!(?command, "executing command");
    crate::app::features::library::handle_command(command, library, tx, tasks)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
