//! Lookup keys for language sources
//!
//! Sonarr/Radarr style library paths embed the catalog id as a bracketed
//! tag, e.g. `Show (2020) [tvdbid-12345]/Season 01/...` or
//! `Movie (1999) [tmdbid-603].mkv`. Title searches use the probed title
//! instead.

use std::fmt;

use serde::{Deserialize, Serialize};

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// Which catalog an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    /// TheTVDB, used by Sonarr
    Tvdb,
    /// TheMovieDB, used by Radarr
    Tmdb,
}

impl IdKind {
    /// Query parameter / tag name, `tvdbid` or `tmdbid`.
    pub fn tag(&self) -> &'static str {
        match self {
            IdKind::Tvdb => "tvdbid",
            IdKind::Tmdb => "tmdbid",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IdKind::Tvdb => write!(f, "TVDB"),
            IdKind::Tmdb => write!(f, "TMDB"),
        }
    }
}

/// A catalog id pulled out of a file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogId {
    pub kind: IdKind,
    pub value: String,
}

impl CatalogId {
    /// Extract a catalog id of the given kind from `path`.
    pub fn from_path(path: &str, kind: IdKind) -> Option<CatalogId> {
        extract_id(path, kind).map(|value| CatalogId { kind, value })
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} id {}", self.kind, self.value)
    }
}

/// What a language source is asked about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKey {
    /// Catalog id from the file path
    Catalog(CatalogId),
    /// Title from the file's metadata
    Title(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LookupKey::Catalog(id) => write!(f, "{}", id),
            LookupKey::Title(title) => write!(f, "title '{}'", title),
        }
    }
}

/// Find `[tvdbid-<digits>]` or `[tmdbid-<digits>]` (case-insensitive) and
/// return the digits. `None` just means there is nothing to correlate.
pub fn extract_id(path: &str, kind: IdKind) -> Option<String> {
    let re = match kind {
        IdKind::Tvdb => regex!(r"(?i)\[tvdbid-([0-9]+)\]"),
        IdKind::Tmdb => regex!(r"(?i)\[tmdbid-([0-9]+)\]"),
    };
    re.captures(path).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tvdb_id() {
        assert_eq!(
            extract_id("Show.S01E01.[tvdbid-12345].mkv", IdKind::Tvdb),
            Some("12345".to_string())
        );
    }

    #[test]
    fn test_extract_without_bracket() {
        assert_eq!(extract_id("Show.S01E01.mkv", IdKind::Tvdb), None);
        assert_eq!(extract_id("tvdbid-12345.mkv", IdKind::Tvdb), None);
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        assert_eq!(
            extract_id("/movies/Heat (1995) [TMDBID-949]/Heat.mkv", IdKind::Tmdb),
            Some("949".to_string())
        );
    }

    #[test]
    fn test_extract_wrong_kind() {
        assert_eq!(extract_id("Heat [tmdbid-949].mkv", IdKind::Tvdb), None);
    }

    #[test]
    fn test_extract_from_directory_component() {
        let path = "/tv/Shogun (2024) [tvdbid-392573]/Season 01/Shogun - S01E01.mkv";
        let id = CatalogId::from_path(path, IdKind::Tvdb).unwrap();
        assert_eq!(id.value, "392573");
        assert_eq!(id.to_string(), "TVDB id 392573");
    }

    #[test]
    fn test_non_digit_id_is_ignored() {
        assert_eq!(extract_id("Show [tvdbid-abc].mkv", IdKind::Tvdb), None);
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        assert_eq!(extract_id("Show [tvdbid-\u{663}\u{664}].mkv", IdKind::Tvdb), None);
        assert_eq!(extract_id("Show [tmdbid-12\u{663}].mkv", IdKind::Tmdb), None);
    }

    #[test]
    fn test_lookup_key_display() {
        let id = CatalogId {
            kind: IdKind::Tmdb,
            value: "603".to_string(),
        };
        assert_eq!(LookupKey::Catalog(id).to_string(), "TMDB id 603");
        assert_eq!(
            LookupKey::Title("Shogun".to_string()).to_string(),
            "title 'Shogun'"
        );
    }
}
