//! Native-language track filtering
//!
//! Decides, for one media file about to be transcoded, which audio streams
//! to drop (anything not in the title's native language or English) and
//! which audio / subtitle stream should carry the default disposition.

pub mod config;
pub mod config_file;
pub mod decision;
pub mod error;
pub mod filter;
pub mod identifier;
pub mod language;
pub mod pipeline;
pub mod probe;
pub mod provider;
pub mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use decision::{DecisionRecord, StreamDecision};
pub use error::{FilterError, Result};
pub use filter::{filter_streams, reconcile, DispositionCorrection, FilterOutcome, KeepSet};
pub use identifier::{extract_id, CatalogId, IdKind, LookupKey};
pub use language::{LanguageCode, LanguageResolver, LanguageTable};
pub use pipeline::{decide, process_file};
pub use probe::ProbedMedia;
pub use provider::{ArrClient, OriginalLanguageSource, ProviderClient, ProviderKind, TmdbClient};
pub use types::{settle_streams, StreamDescriptor, StreamKind};
