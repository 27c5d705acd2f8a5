//! Sonarr / Radarr / TMDB API types for native language lookup.

use serde::{Deserialize, Serialize};

/// A language as reported by the *arr APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrLanguage {
    #[serde(default)]
    pub id: Option<i64>,
    /// English name, e.g. "Japanese".
    pub name: String,
}

/// The subset of a series / movie resource we care about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrMedia {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub original_language: Option<ArrLanguage>,
}

impl ArrMedia {
    /// Original language name, if the provider knows it.
    pub fn original_language_name(&self) -> Option<&str> {
        self.original_language
            .as_ref()
            .map(|l| l.name.trim())
            .filter(|name| !name.is_empty())
    }
}

/// `GET /3/search/tv` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Vec<TmdbSeries>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

/// One TMDB search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbSeries {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    /// ISO 639-1 code, e.g. "ja".
    #[serde(default)]
    pub original_language: Option<String>,
}

impl TmdbSeries {
    pub fn original_language_code(&self) -> Option<&str> {
        self.original_language
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}
