//! devprops CLI library
//!
//! Command handlers live here so they can be exercised against mock
//! platforms; `main.rs` only parses arguments and wires the host platform.

pub mod commands;
