//! Track filtering module
//!
//! This module holds the per-file decision logic:
//! - Keep set derivation (native language + English fallback)
//! - Audio removal and default audio/subtitle selection
//! - Reconciliation of pre-existing default dispositions

pub mod engine;
pub mod keep_set;
pub mod reconcile;

pub use engine::{filter_streams, FilterOutcome};
pub use keep_set::KeepSet;
pub use reconcile::{reconcile, DispositionCorrection};
