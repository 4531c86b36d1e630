//! External classifier invocation.
//!
//! The classifier is an opaque program that receives the path of an ndjson file and prints its
//! guess as the last non-empty line of stdout. Nothing here interprets the drawing itself.

/// Worker thread with a single-slot result cell.
pub mod job;
/// Synchronous process invocation and output parsing.
pub mod process;
