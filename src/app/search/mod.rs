//! Debounced library search backing the command palette.
//!
//! [`SearchQuery`] turns keystrokes into a settled query, [`SearchAggregator`]
//! decides when that query is fetched and which response may be applied, and
//! [`visible_groups`] partitions a response into the groups that render.

pub mod aggregator;
pub mod debounce;
pub mod groups;

pub use aggregator::{is_enabled, Completion, SearchAggregator, SearchRequest};
pub use debounce::{DebounceTicket, Generation, SearchQuery, SettleOutcome, DEFAULT_QUIET_PERIOD};
pub use groups::{visible_groups, PaletteEntry, ResultGroup, ResultRow};
