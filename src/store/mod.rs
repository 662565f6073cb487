//! User storage
//!
//! Append-only pipe-delimited user log with duplicate detection.

pub mod format;
pub mod operations;

pub use operations::UserStore;
