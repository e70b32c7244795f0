//! Text interface for the stockroom inventory tracker.
//!
//! Everything here is I/O plumbing: reading lines and numbers, drawing the
//! menu and item tables, and mapping domain outcomes to messages. All state
//! changes go through [`stockroom_inventory::Tracker`].

pub mod config;
pub mod display;
pub mod menu;
pub mod prompt;
pub mod session;

pub use config::CliConfig;
pub use menu::MenuChoice;
pub use session::Session;
