//! CLI command handlers
//!
//! Every handler receives the property manager by reference and writes to a
//! caller-supplied sink.

pub mod get;
pub mod keys;
pub mod show;

pub use get::{handle_get, GetOutcome};
pub use keys::handle_keys;
pub use show::{handle_show, PropertyEntry, PropertySnapshot};
