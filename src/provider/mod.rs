//! Native language lookup through Sonarr, Radarr or TMDB
//!
//! Sonarr and Radarr expose the same v3 API shape: a lookup by catalog id
//! returns a JSON array of matches, each carrying `originalLanguage.name`.
//! TMDB is searched by title and answers with an ISO 639-1 code.

pub mod client;
pub mod tmdb;
pub mod types;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::identifier::{IdKind, LookupKey};

pub use client::ArrClient;
pub use tmdb::TmdbClient;
pub use types::{ArrLanguage, ArrMedia, TmdbSearchResponse, TmdbSeries};

/// Which metadata provider supplies the native language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Sonarr,
    Radarr,
    /// TMDB title search
    Tmdb,
}

impl ProviderKind {
    /// Catalog the provider is keyed by. TMDB title search has none.
    pub fn id_kind(&self) -> Option<IdKind> {
        match self {
            ProviderKind::Sonarr => Some(IdKind::Tvdb),
            ProviderKind::Radarr => Some(IdKind::Tmdb),
            ProviderKind::Tmdb => None,
        }
    }

    /// Lookup endpoint, relative to the base URL.
    pub fn lookup_path(&self) -> &'static str {
        match self {
            ProviderKind::Sonarr => "/api/v3/series",
            ProviderKind::Radarr => "/api/v3/movie",
            ProviderKind::Tmdb => "/3/search/tv",
        }
    }

    /// Query parameters that trim the response down.
    pub fn extra_params(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ProviderKind::Sonarr => &[("includeSeasonImages", "false")],
            ProviderKind::Radarr => &[("excludeLocalCovers", "true")],
            ProviderKind::Tmdb => &[],
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            ProviderKind::Sonarr => "http://192.168.1.2:8989",
            ProviderKind::Radarr => "http://192.168.1.2:7878",
            ProviderKind::Tmdb => "https://api.themoviedb.org",
        }
    }

    /// What the provider calls a match, for messages.
    pub fn media_noun(&self) -> &'static str {
        match self {
            ProviderKind::Sonarr | ProviderKind::Tmdb => "Series",
            ProviderKind::Radarr => "Movie",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProviderKind::Sonarr => write!(f, "Sonarr"),
            ProviderKind::Radarr => write!(f, "Radarr"),
            ProviderKind::Tmdb => write!(f, "TMDB"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sonarr" => Ok(ProviderKind::Sonarr),
            "radarr" => Ok(ProviderKind::Radarr),
            "tmdb" => Ok(ProviderKind::Tmdb),
            other => Err(format!(
                "unknown provider '{}', expected sonarr, radarr or tmdb",
                other
            )),
        }
    }
}

/// Anything that can tell the original language of a title.
#[allow(async_fn_in_trait)]
pub trait OriginalLanguageSource {
    /// Short name for logs and decision records.
    fn source_name(&self) -> String;

    /// What to ask about the file at `path` whose metadata title is `title`.
    fn lookup_key(&self, path: &str, title: Option<&str>) -> Result<LookupKey>;

    /// Original language as a name ("Japanese") or code ("ja").
    async fn original_language(&self, key: &LookupKey) -> Result<String>;
}

/// The configured provider's client.
#[derive(Debug, Clone)]
pub enum ProviderClient {
    Arr(ArrClient),
    Tmdb(TmdbClient),
}

impl ProviderClient {
    /// Build the client matching `config.kind`.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        match config.kind {
            ProviderKind::Sonarr | ProviderKind::Radarr => Ok(ProviderClient::Arr(ArrClient::new(config)?)),
            ProviderKind::Tmdb => Ok(ProviderClient::Tmdb(TmdbClient::new(config)?)),
        }
    }
}

impl OriginalLanguageSource for ProviderClient {
    fn source_name(&self) -> String {
        match self {
            ProviderClient::Arr(c) => c.source_name(),
            ProviderClient::Tmdb(c) => c.source_name(),
        }
    }

    fn lookup_key(&self, path: &str, title: Option<&str>) -> Result<LookupKey> {
        match self {
            ProviderClient::Arr(c) => c.lookup_key(path, title),
            ProviderClient::Tmdb(c) => c.lookup_key(path, title),
        }
    }

    async fn original_language(&self, key: &LookupKey) -> Result<String> {
        match self {
            ProviderClient::Arr(c) => c.original_language(key).await,
            ProviderClient::Tmdb(c) => c.original_language(key).await,
        }
    }
}
