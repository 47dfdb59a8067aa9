use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tonearm::app::{config::AppConfig, r#loop::run_loop, state::AppState};
use tonearm::infrastructure::NavidromeAdapter;

/// Terminal client for Navidrome music servers.
#[derive(Parser)]
#[command(name = "tonearm", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    ///
    /// Defaults to `~/.config/tonearm/config.toml`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Server profile to connect to, overriding `default_server`.
    #[arg(long)]
    server: Option<String>,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = tonearm::logging::init()?;

    // Everything that can fail on bad config happens before the terminal
    // switches to raw mode.
    let config = AppConfig::load(cli.config.as_deref())?;
    if let Some(name) = &cli.server {
        if config.active_profile(Some(name)).is_none() {
            anyhow::bail!("No server named '{name}' in the config");
        }
    }
    let library = Arc::new(NavidromeAdapter::new()?);
    let app_state = AppState::new(&config, cli.server.as_deref());
    tracing::info!(
        servers = config.servers.len(),
        active = ?app_state.active_server.as_ref().map(|s| &s.name),
        "starting"
    );

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, library).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "exited with error");
        eprintln!("{err:?}");
    }

    Ok(())
}
