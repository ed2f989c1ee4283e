//! bizdir-core
//!
//! Record model, filter criteria, and the pure filter/sort engine for
//! the business-directory browser. `store` ingests and owns the session's
//! records, `engine` derives an ordered [`view::ResultView`] from them.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod engine;
pub mod error;
pub mod store;
pub mod types;
pub mod view;
