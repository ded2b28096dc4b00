// Matcher module: catalog filtering/ranking plus the synthetic fallback.

pub mod fallback;
pub mod ranking;

// Re-export the main matcher implementation for ease of use.
pub use ranking::{Matcher, RankerImpl};
