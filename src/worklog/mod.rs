//! The day's task entries and their markdown log file.

pub mod entry;
pub mod writer;

pub use entry::{SessionLog, TaskEntry};
pub use writer::LogWriter;
