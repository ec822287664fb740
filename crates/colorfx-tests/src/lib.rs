//! Integration tests for colorfx crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between colorfx-core, colorfx-math and colorfx-ops.
