use crate::app::config::ServerProfile;
use crate::app::search::{DebounceTicket, SearchRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Connect(ServerProfile),
    ScheduleDebounce(DebounceTicket), // Replaces any pending debounce timer
    Search(SearchRequest),            // Replaces any in-flight search
    CancelSearch,
    CancelPending, // Drop the debounce timer and the in-flight search
}
