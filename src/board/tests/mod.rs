//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Standard starting position and accessors
//! - `placement.rs` - Place/remove/move and promotion
//! - `proptest.rs` - Property-based tests
