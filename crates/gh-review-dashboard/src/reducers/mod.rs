//! Reducers
//!
//! Pure functions `(state, action) -> state`, one per state slice.

pub mod app_reducer;
pub mod auth_reducer;
pub mod review_queue_reducer;
