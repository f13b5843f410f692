//! State module for tracking check progress
//!
//! Each check request walks the `CheckState` machine once. State is never
//! shared between requests.

mod check_state;

pub use check_state::CheckState;
