//! Newline-delimited JSON drawing records, the input format of the classifier.

/// Record type plus file reader/writer.
pub mod ndjson;
