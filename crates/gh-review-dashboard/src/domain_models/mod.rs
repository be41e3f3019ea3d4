//! Display helpers derived from bridge data, never stored in state

mod check_indicator;
mod relative_time;

pub use check_indicator::CheckIndicator;
pub use relative_time::format_relative_time;
