//! Dynamic JSON documents with bracket-path addressing and schema validation.

/// Document values, bracket paths, and the schema validator.
pub mod doc;
