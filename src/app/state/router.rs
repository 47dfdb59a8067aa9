use crate::domain::routes::NavigationIntent;

const MAX_HISTORY: usize = 50;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Router {
    current: NavigationIntent,
    history: Vec<NavigationIntent>,
}

impl Router {
    #[must_use]
    pub fn current(&self) -> &NavigationIntent {
        &self.current
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns `false` if `intent` is already the current route.
    pub fn navigate(&mut self, intent: NavigationIntent) -> bool {
        if intent == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, intent);
        self.history.push(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        true
    }

    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}
