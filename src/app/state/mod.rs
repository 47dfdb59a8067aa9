use super::config::{AppConfig, ServerProfile};
use super::keymap::KeyMap;
use std::sync::Arc;

pub mod error;
pub mod palette;
pub mod router;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use palette::{PageStack, PalettePage, PaletteState};
pub use router::Router;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,  // Browsing the current route
    Palette, // Command palette open, capturing input
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Connection {
    #[default]
    Offline,
    Connecting(String),
    Connected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub connection: Connection,

    // --- Servers ---
    pub servers: Vec<ServerProfile>,
    pub active_server: Option<ServerProfile>,

    // --- Navigation ---
    pub router: Router,

    // --- Command Palette ---
    pub palette: PaletteState,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig, server_override: Option<&str>) -> Self {
        Self {
            servers: config.servers.clone(),
            active_server: config.active_profile(server_override).cloned(),
            palette: PaletteState::new(config.debounce(), config.limits()),
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            ..Default::default()
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(ErrorState::new(message, ErrorSeverity::Error));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            connection: Connection::Offline,
            servers: Vec::new(),
            active_server: None,
            router: Router::default(),
            palette: PaletteState::default(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            theme: crate::theme::Theme::default(),
        }
    }
}
