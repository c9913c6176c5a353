//! Storage layer for spendlog
//!
//! Provides JSON file storage with atomic writes and automatic
//! directory creation.

pub mod file_io;
pub mod session;

pub use file_io::{json_file_valid, read_json, write_json_atomic};
pub use session::SessionState;
