//! Interactive front end for the fiber network graph.
//!
//! The binary in `main.rs` wires these pieces to stdin/stdout; tests drive
//! them with in-memory readers and writers.

pub mod config;
pub mod error;
pub mod handler;
pub mod menu;
pub mod state;

pub use config::{AppConfig, CliArgs};
pub use error::{CliError, CliResult};
pub use handler::{handle_command, run, Console, Flow};
pub use menu::Command;
pub use state::Session;
