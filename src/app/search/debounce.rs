use std::time::Duration;

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(400);

/// Monotonic token used to tell the latest timer or request from superseded ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Asks the runtime to report `generation` back once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    pub generation: Generation,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// `debounced` took a new value.
    Updated,
    /// The timer was current but `raw` already equals `debounced`.
    Unchanged,
    /// A later edit (or a reset) replaced this timer.
    Superseded,
}

/// Raw input text plus its debounced copy.
///
/// `debounced` only ever takes a value that `raw` held, unchanged, for a full
/// quiet period: every edit bumps the generation and only the ticket carrying
/// the current generation may settle.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    raw: String,
    debounced: String,
    generation: Generation,
    pending: Option<Generation>,
    quiet_period: Duration,
}

impl SearchQuery {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            raw: String::new(),
            debounced: String::new(),
            generation: Generation::default(),
            pending: None,
            quiet_period,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn debounced(&self) -> &str {
        &self.debounced
    }

    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces the raw text. Returns a ticket for a fresh quiet period when the
    /// text actually changed; any earlier ticket becomes inert.
    pub fn set_raw(&mut self, value: impl Into<String>) -> Option<DebounceTicket> {
        let value = value.into();
        if value == self.raw {
            return None;
        }
        self.raw = value;
        self.generation = self.generation.next();
        self.pending = Some(self.generation);
        Some(DebounceTicket {
            generation: self.generation,
            delay: self.quiet_period,
        })
    }

    pub fn settle(&mut self, generation: Generation) -> SettleOutcome {
        if self.pending != Some(generation) {
            return SettleOutcome::Superseded;
        }
        self.pending = None;
        if self.debounced == self.raw {
            SettleOutcome::Unchanged
        } else {
            self.debounced.clone_from(&self.raw);
            SettleOutcome::Updated
        }
    }

    /// Empties both values and invalidates any outstanding ticket.
    pub fn clear(&mut self) {
        self.raw.clear();
        self.debounced.clear();
        self.generation = self.generation.next();
        self.pending = None;
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let query = SearchQuery::default();
        assert_eq!(query.raw(), "");
        assert_eq!(query.debounced(), "");
        assert!(!query.is_pending());
        assert_eq!(query.quiet_period(), Duration::from_millis(400));
    }

    #[test]
    fn test_only_latest_ticket_settles() {
        let mut query = SearchQuery::default();
        let first = query.set_raw("pin").unwrap();
        let second = query.set_raw("pink floyd").unwrap();
        assert_ne!(first.generation, second.generation);

        assert_eq!(query.settle(first.generation), SettleOutcome::Superseded);
        assert_eq!(query.debounced(), "");

        assert_eq!(query.settle(second.generation), SettleOutcome::Updated);
        assert_eq!(query.debounced(), "pink floyd");

        // A ticket settles at most once
        assert_eq!(query.settle(second.generation), SettleOutcome::Superseded);
    }

    #[test]
    fn test_unchanged_text_does_not_restart_timer() {
        let mut query = SearchQuery::default();
        let ticket = query.set_raw("abba").unwrap();
        assert!(query.set_raw("abba").is_none());
        assert_eq!(query.settle(ticket.generation), SettleOutcome::Updated);
    }

    #[test]
    fn test_returning_to_settled_value() {
        let mut query = SearchQuery::default();
        let t = query.set_raw("abba").unwrap();
        query.settle(t.generation);

        query.set_raw("abb").unwrap();
        let t = query.set_raw("abba").unwrap();
        assert_eq!(query.settle(t.generation), SettleOutcome::Unchanged);
        assert_eq!(query.debounced(), "abba");
    }

    #[test]
    fn test_clear_invalidates_pending_ticket() {
        let mut query = SearchQuery::default();
        let t = query.set_raw("queen").unwrap();
        query.clear();
        assert_eq!(query.settle(t.generation), SettleOutcome::Superseded);
        assert_eq!(query.raw(), "");
        assert_eq!(query.debounced(), "");
    }
}
