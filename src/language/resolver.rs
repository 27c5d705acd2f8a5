//! Language name / code resolution

use std::fmt;

use serde::{Deserialize, Serialize};

use super::table::{canonical_code, LanguageTable};
use crate::error::{FilterError, Result};

/// Three-letter code for English, the fallback language.
pub const ENGLISH: &str = "eng";

/// A canonical three-letter language code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Wrap a code, normalizing it to its canonical form.
    pub fn new(code: &str) -> Self {
        LanguageCode(canonical_code(code))
    }

    /// The English fallback code.
    pub fn english() -> Self {
        LanguageCode(ENGLISH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == ENGLISH
    }

    /// Does a raw stream tag denote this language?
    pub fn matches_tag(&self, tag: &str) -> bool {
        canonical_code(tag) == self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns provider language names and ISO codes into three-letter codes.
#[derive(Debug, Clone, Copy)]
pub struct LanguageResolver<'t> {
    table: &'t LanguageTable,
}

impl<'t> LanguageResolver<'t> {
    pub fn new(table: &'t LanguageTable) -> Self {
        Self { table }
    }

    /// Resolve a full language name ("Japanese"), a two-letter code ("ja")
    /// or a three-letter code ("jpn", "fre") to its three-letter code.
    pub fn resolve(&self, name_or_code: &str) -> Result<LanguageCode> {
        let input = name_or_code.trim();

        let found = match input.len() {
            2 => self.table.from_two_letter(input),
            3 => self.table.from_three_letter(input),
            _ => None,
        }
        .or_else(|| self.table.from_name(input));

        match found {
            Some(code) => {
                tracing::debug!("Resolved language '{}' to '{}'", input, code);
                Ok(LanguageCode(code.to_string()))
            }
            None => Err(FilterError::LanguageNotFound(input.to_string())),
        }
    }

    pub fn table(&self) -> &'t LanguageTable {
        self.table
    }
}

impl Default for LanguageResolver<'static> {
    fn default() -> Self {
        Self::new(LanguageTable::builtin())
    }
}
