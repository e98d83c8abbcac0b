//! lunch - Fetch today's school lunch menu
//!
//! Reads the school id and grade from ~/.lunch/config.json, refuses to run
//! on weekends, then asks the schoolcafe API what's for lunch today and
//! prints the entrees.

pub mod config;
pub mod menu;

pub use config::LunchConfig;
pub use menu::MenuError;
