//! Output Format Tests
//!
//! Tests for the serialized analysis record:
//! - json format (field names and enum spellings)
//! - text format (human-readable report)

pub mod consistency_tests;
