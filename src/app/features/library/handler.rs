use crate::app::{action::Action, command::Command};
use crate::domain::library::LibraryFacade;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};

/// Abort handles of the debounce timer, the in-flight search and the
/// in-flight login. At most one of each is alive; scheduling a new one aborts
/// its predecessor.
#[derive(Debug, Default)]
pub struct PendingTasks {
    debounce: Option<AbortHandle>,
    search: Option<AbortHandle>,
    connect: Option<AbortHandle>,
}

impl PendingTasks {
    fn replace_debounce(&mut self, handle: AbortHandle) {
        if let Some(old) = self.debounce.replace(handle) {
            old.abort();
        }
    }

    fn replace_search(&mut self, handle: AbortHandle) {
        if let Some(old) = self.search.replace(handle) {
            old.abort();
        }
    }

    fn replace_connect(&mut self, handle: AbortHandle) {
        if let Some(old) = self.connect.replace(handle) {
            old.abort();
        }
    }

    pub fn cancel_search(&mut self) {
        if let Some(handle) = self.search.take() {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
        self.cancel_search();
    }
}

impl Drop for PendingTasks {
    fn drop(&mut self) {
        self.cancel_all();
        if let Some(handle) = self.connect.take() {
            handle.abort();
        }
    }
}

pub fn handle_command(
    command: Command,
    library: Arc<dyn LibraryFacade>,
    tx: mpsc::Sender<Action>,
    tasks: &mut PendingTasks,
) -> Result<()> {
    match command {
        Command::ScheduleDebounce(ticket) => {
            // Deadline is fixed now, not when the task first runs
            let deadline = Instant::now() + ticket.delay;
            let handle = tokio::spawn(async move {
                sleep_until(deadline).await;
                let _ = tx.send(Action::DebounceElapsed(ticket.generation)).await;
            });
            tasks.replace_debounce(handle.abort_handle());
        }
        Command::Search(request) => {
            let handle = tokio::spawn(async move {
                let result = library
                    .search_all(&request.query, request.limits)
                    .await
                    .map_err(|e| format!("{e:#}"));
                let _ = tx
                    .send(Action::SearchCompleted(request.generation, result))
                    .await;
            });
            tasks.replace_search(handle.abort_handle());
        }
        Command::CancelSearch => tasks.cancel_search(),
        Command::CancelPending => tasks.cancel_all(),
        Command::Connect(profile) => {
            tasks.cancel_all();
            let handle = tokio::spawn(async move {
                let result = library
                    .connect(&profile)
                    .await
                    .map_err(|e| format!("{e:#}"));
                let _ = tx.send(Action::ServerConnected(profile.name, result)).await;
            });
            tasks.replace_connect(handle.abort_handle());
        }
    }
    Ok(())
}
