/*
[INPUT]:  Public API exports for taskflow-sync crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod app;
pub mod cli;

// Re-export main types for convenience
pub use app::{Notification, Severity, TaskController};
