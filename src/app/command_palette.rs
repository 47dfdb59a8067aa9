use super::action::Action;
use super::search::ResultRow;
use super::state::{AppState, Connection, PalettePage};
use crate::domain::models::LibraryKind;
use crate::domain::routes::{AppRoute, NavigationIntent};

#[derive(Debug, Clone, PartialEq)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    pub action: Action,
}

impl CommandDefinition {
    fn new(name: impl Into<String>, description: impl Into<String>, action: Action) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            action,
        }
    }
}

/// A selectable palette row: a search result or a page command.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteItem {
    Result(ResultRow),
    Command(CommandDefinition),
}

impl PaletteItem {
    /// Results only navigate; they never close the palette on their own.
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            Self::Result(row) => Action::Navigate(row.target.clone()),
            Self::Command(cmd) => cmd.action.clone(),
        }
    }
}

const GO_TO_ROUTES: [AppRoute; 8] = [
    AppRoute::Home,
    AppRoute::Settings,
    AppRoute::LibraryAlbums,
    AppRoute::LibrarySongs,
    AppRoute::LibraryAlbumArtists,
    AppRoute::LibraryGenres,
    AppRoute::LibraryFolders,
    AppRoute::Playlists,
];

#[must_use]
pub fn get_commands(page: PalettePage, state: &AppState) -> Vec<CommandDefinition> {
    match page {
        PalettePage::Home => {
            let mut commands = vec![
                CommandDefinition::new(
                    "Go to page",
                    "Jump to a library view",
                    Action::PushPage(PalettePage::GoTo),
                ),
                CommandDefinition::new(
                    "Manage servers",
                    "Switch to another configured server",
                    Action::PushPage(PalettePage::ManageServers),
                ),
            ];
            if state.router.can_go_back() {
                commands.push(CommandDefinition::new(
                    "Back",
                    "Return to the previous view",
                    Action::NavigateBack,
                ));
            }
            commands.push(CommandDefinition::new("Quit", "Quit tonearm", Action::Quit));
            commands
        }
        PalettePage::GoTo => {
            let mut commands: Vec<_> = GO_TO_ROUTES
                .iter()
                .map(|&route| {
                    CommandDefinition::new(
                        route.title(),
                        route.template(),
                        Action::NavigateAndClose(NavigationIntent::to(route)),
                    )
                })
                .collect();
            commands.insert(
                1,
                CommandDefinition::new(
                    "Search",
                    "Full search of the library",
                    Action::NavigateAndClose(NavigationIntent::search(LibraryKind::Song)),
                ),
            );
            commands
        }
        PalettePage::ManageServers => state
            .servers
            .iter()
            .map(|server| {
                let active = matches!(&state.connection, Connection::Connected(name) if *name == server.name);
                let description = if active {
                    format!("{} (active)", server.url)
                } else {
                    server.url.clone()
                };
                CommandDefinition::new(
                    server.name.clone(),
                    description,
                    Action::SwitchServer(server.clone()),
                )
            })
            .collect(),
    }
}

/// Indices into `commands` matching `query`, name matches first.
#[must_use]
pub fn search_commands(commands: &[CommandDefinition], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..commands.len()).collect();
    }

    let query_lower = query.to_lowercase();
    let mut results = Vec::new();

    // First pass: substring match in name (higher priority)
    for (i, cmd) in commands.iter().enumerate() {
        if cmd.name.to_lowercase().contains(&query_lower) {
            results.push(i);
        }
    }

    // Second pass: substring match in description (lower priority)
    for (i, cmd) in commands.iter().enumerate() {
        if !results.contains(&i) && cmd.description.to_lowercase().contains(&query_lower) {
            results.push(i);
        }
    }

    results
}

#[must_use]
pub fn visible_commands(state: &AppState) -> Vec<CommandDefinition> {
    let commands = get_commands(state.palette.pages.active(), state);
    search_commands(&commands, state.palette.raw())
        .into_iter()
        .map(|i| commands[i].clone())
        .collect()
}

/// Everything selectable, in display order: result groups, then commands.
#[must_use]
pub fn palette_items(state: &AppState) -> Vec<PaletteItem> {
    let results = state
        .palette
        .groups()
        .into_iter()
        .flat_map(|group| group.rows)
        .map(PaletteItem::Result);
    let commands = visible_commands(state).into_iter().map(PaletteItem::Command);
    results.chain(commands).collect()
}
