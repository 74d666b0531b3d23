//! Discovery domain module.
//!
//! Turns the full event list plus the user's filter selections into a ranked
//! display list that balances relevance with forced exposure to unrelated
//! events ("serendipity sampling").

mod sampler;

// Re-export public API
pub use sampler::{discover, forced_sample_size, DisplayItem, SearchFilter};
