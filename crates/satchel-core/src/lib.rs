//! Satchel Core - Shared functionality for the satchel utilities
//!
//! A grab-bag of small personal command-line tools.

pub mod http;
pub mod paths;

pub use paths::Paths;
