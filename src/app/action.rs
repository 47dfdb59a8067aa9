use crate::app::command::Command;
use crate::app::config::ServerProfile;
use crate::app::search::Generation;
use crate::app::state::PalettePage;
use crate::domain::models::SearchResultSet;
use crate::domain::routes::NavigationIntent;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Router ---
    Navigate(NavigationIntent),         // Open a route, palette stays as it is
    NavigateAndClose(NavigationIntent), // Open a route and end the palette session
    NavigateBack,                       // Pop the route history

    // --- Command Palette ---
    TogglePalette,                          // Palette hotkey (open, or close/back)
    ClosePalette,                           // ESC (close on home, back elsewhere)
    PaletteInput(crossterm::event::KeyEvent), // Edit the query text
    PaletteNext,                            // Next entry
    PalettePrev,                            // Previous entry
    PaletteSelect,                          // Run the selected entry
    PushPage(PalettePage),                  // Enter a palette sub-page
    SwitchServer(ServerProfile),            // Connect to another server

    // --- Errors ---
    DismissError,

    // --- Async Results ---
    DebounceElapsed(Generation),
    SearchCompleted(Generation, Result<SearchResultSet, String>),
    /// Profile name the login was started for, and its outcome.
    ServerConnected(String, Result<String, String>),
    ErrorOccurred(String),
}
