use super::debounce::Generation;
use super::groups::{visible_groups, ResultGroup};
use crate::domain::models::{SearchLimits, SearchResultSet};

/// A fetch the runtime should perform, tagged with the generation it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: Generation,
    pub query: String,
    pub limits: SearchLimits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// The response belongs to a superseded request and was dropped.
    Stale,
}

/// The fetch is enabled only when both the raw and the debounced query are
/// non-empty, so a trailing debounce after a clear never fires a request.
#[must_use]
pub fn is_enabled(raw: &str, debounced: &str) -> bool {
    !raw.is_empty() && !debounced.is_empty()
}

/// Owns the results of the palette search and the generation of the one
/// request whose response may still be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchAggregator {
    limits: SearchLimits,
    generation: Generation,
    in_flight: Option<Generation>,
    data: Option<SearchResultSet>,
}

impl SearchAggregator {
    #[must_use]
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            generation: Generation::default(),
            in_flight: None,
            data: None,
        }
    }

    #[must_use]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    #[must_use]
    pub fn data(&self) -> Option<&SearchResultSet> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Called whenever the debounced query changes. Previous results and any
    /// outstanding request are invalidated; a new request is returned only if
    /// the activation guard passes.
    pub fn request(&mut self, raw: &str, debounced: &str) -> Option<SearchRequest> {
        self.generation = self.generation.next();
        self.data = None;
        if !is_enabled(raw, debounced) {
            self.in_flight = None;
            return None;
        }
        self.in_flight = Some(self.generation);
        Some(SearchRequest {
            generation: self.generation,
            query: debounced.to_string(),
            limits: self.limits,
        })
    }

    pub fn complete(
        &mut self,
        generation: Generation,
        result: Result<SearchResultSet, String>,
    ) -> Completion {
        if self.in_flight != Some(generation) {
            return Completion::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(data) => {
                self.data = Some(data);
                Completion::Applied
            }
            Err(_) => {
                self.data = None;
                Completion::Failed
            }
        }
    }

    /// Drops results and makes every outstanding response stale. The
    /// generation keeps counting so a later session cannot collide with it.
    pub fn reset(&mut self) {
        self.generation = self.generation.next();
        self.in_flight = None;
        self.data = None;
    }

    #[must_use]
    pub fn groups(&self, raw: &str) -> Vec<ResultGroup> {
        visible_groups(raw, self.data.as_ref())
    }
}

impl Default for SearchAggregator {
    fn default() -> Self {
        Self::new(SearchLimits::default())
    }
}
