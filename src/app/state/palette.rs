use crate::app::search::{ResultGroup, SearchAggregator, SearchQuery};
use crate::domain::models::SearchLimits;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PalettePage {
    Home,
    GoTo,
    ManageServers,
}

impl PalettePage {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "COMMAND PALETTE",
            Self::GoTo => "GO TO",
            Self::ManageServers => "SERVERS",
        }
    }
}

/// Palette navigation history. Never empty: `Home` is always at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStack {
    pages: Vec<PalettePage>,
}

impl PageStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: vec![PalettePage::Home],
        }
    }

    pub fn push(&mut self, page: PalettePage) {
        self.pages.push(page);
    }

    /// Removes the top page. Returns `None` without touching the stack when
    /// only `Home` is left; the caller has to close the palette instead.
    pub fn pop(&mut self) -> Option<PalettePage> {
        if self.pages.len() <= 1 {
            return None;
        }
        self.pages.pop()
    }

    #[must_use]
    pub fn active(&self) -> PalettePage {
        self.pages.last().copied().unwrap_or(PalettePage::Home)
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.active() == PalettePage::Home
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn pages(&self) -> &[PalettePage] {
        &self.pages
    }

    pub fn reset(&mut self) {
        self.pages.truncate(1);
    }
}

impl Default for PageStack {
    fn default() -> Self {
        Self::new()
    }
}

/// One palette session. Lives for the whole program so generation counters
/// keep increasing across open/close cycles; `close` resets the session data.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    pub is_open: bool,
    pub query: SearchQuery,
    pub pages: PageStack,
    pub search: SearchAggregator,
    pub selected_index: usize,
}

impl PaletteState {
    #[must_use]
    pub fn new(quiet_period: Duration, limits: SearchLimits) -> Self {
        Self {
            is_open: false,
            query: SearchQuery::new(quiet_period),
            pages: PageStack::new(),
            search: SearchAggregator::new(limits),
            selected_index: 0,
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.selected_index = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.query.clear();
        self.pages.reset();
        self.search.reset();
        self.selected_index = 0;
    }

    /// Clears the query and its results while keeping the session open.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.search.reset();
        self.selected_index = 0;
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        self.query.raw()
    }

    #[must_use]
    pub fn groups(&self) -> Vec<ResultGroup> {
        self.search.groups(self.query.raw())
    }

    #[must_use]
    pub fn show_spinner(&self) -> bool {
        self.search.is_loading() && !self.query.raw().is_empty()
    }
}

impl Default for PaletteState {
    fn default() -> Self {
        Self::new(
            crate::app::search::DEFAULT_QUIET_PERIOD,
            SearchLimits::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_stack_never_empties() {
        let mut stack = PageStack::new();
        assert!(stack.is_home());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pages(), &[PalettePage::Home]);

        stack.push(PalettePage::GoTo);
        stack.push(PalettePage::ManageServers);
        assert_eq!(stack.active(), PalettePage::ManageServers);
        assert!(!stack.is_home());

        for _ in 0..5 {
            stack.pop();
            assert!(!stack.is_empty());
        }
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.active(), PalettePage::Home);
    }

    #[test]
    fn test_reset_keeps_home() {
        let mut stack = PageStack::new();
        stack.push(PalettePage::GoTo);
        stack.reset();
        assert_eq!(stack.pages(), &[PalettePage::Home]);
    }

    #[test]
    fn test_close_resets_session() {
        let mut palette = PaletteState::default();
        palette.open();
        if let Some(t) = palette.query.set_raw("pink") {
            palette.query.settle(t.generation);
        }
        palette.pages.push(PalettePage::GoTo);
        palette.selected_index = 3;

        palette.close();
        assert!(!palette.is_open);
        assert_eq!(palette.raw(), "");
        assert_eq!(palette.query.debounced(), "");
        assert!(palette.pages.is_home());
        assert_eq!(palette.selected_index, 0);
    }
}
