//! bizdir-session
//!
//! Stateful session layer over `bizdir-core`: one controller per UI
//! session owning the store and the live criteria, plus the debounce
//! primitive for live search input.

pub mod controller;
pub mod debounce;

pub use controller::{Refresh, ResultSink, SessionController};
pub use debounce::Debouncer;
