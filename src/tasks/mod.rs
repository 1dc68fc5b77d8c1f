//! Background tasks module
//!
//! This module contains the event loop that owns the controller and the
//! reader that turns user input into control events.

pub mod event_loop;
pub mod input_reader;

// Re-export main functions
pub use event_loop::event_loop;
pub use input_reader::{read_commands, spawn_input_reader};
