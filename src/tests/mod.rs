//! Integration testing module
//!
//! End-to-end tests across the filtering flow:
//! - Worked scenarios (mixed languages, untagged streams, English natives)
//! - Invariants over a set of stream layouts
//! - Idempotence of filter + reconcile
//! - The same properties over generated stream lists
//! - Provider lookup against a local HTTP server

pub mod invariants;
