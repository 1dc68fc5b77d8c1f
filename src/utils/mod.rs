//! Utility functions module
//!
//! This module contains utility functions used throughout the application.

pub mod log_writer;
pub mod signals;

// Re-export main functions
pub use log_writer::LogWriter;
pub use signals::shutdown_signal;
