pub mod navidrome;

pub use navidrome::NavidromeAdapter;
