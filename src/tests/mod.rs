//! Test modules for the wildcard trie crate.
//!
//! This module contains all testing infrastructure, including:
//! - Unit tests for each component
//! - Property-based tests using proptest
//! - Test fixtures and utilities
//!
//! The test philosophy follows the project standards:
//! - Testing all error paths and edge cases
//! - Property-based testing for the search operations
//! - Scenario tests over a fixed reference vocabulary

pub mod test_utils;
