//! Language code handling
//!
//! - ISO 639 lookup tables (two-letter, three-letter, English names)
//! - Resolution of provider language names to stream tag codes

pub mod resolver;
pub mod table;

pub use resolver::{LanguageCode, LanguageResolver, ENGLISH};
pub use table::{canonical_code, LanguageTable};
