//! Edge Cases and Error Handling Tests
//!
//! Tests for unusual inputs, error conditions, and boundary cases:
//! - Missing, unreadable and unparsable files
//! - Malformed catalogs and configuration
//! - Comparison budget exhaustion
//! - Score clamping

pub mod error_handling_tests;
