//! Common test utilities and fixtures for archhealth integration tests
//!
//! This module provides:
//! - `TestRepo` builder for laying out source files together with their catalog
//! - Assertions over analysis records

pub mod assertions;
pub mod test_repo;

pub use assertions::*;
pub use test_repo::TestRepo;
