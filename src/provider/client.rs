//! Sonarr / Radarr HTTP client.

use std::time::Duration;

use reqwest::Url;

use super::types::ArrMedia;
use super::{OriginalLanguageSource, ProviderKind};
use crate::config::ProviderConfig;
use crate::error::{FilterError, Result};
use crate::identifier::{CatalogId, IdKind, LookupKey};

/// Validate `config` and build an HTTP client with its timeout.
pub(super) fn http_client(config: &ProviderConfig) -> Result<reqwest::Client> {
    config.validate()?;
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| FilterError::Config(format!("HTTP client error: {}", e)))
}

/// Client for one *arr instance.
#[derive(Debug, Clone)]
pub struct ArrClient {
    kind: ProviderKind,
    id_kind: IdKind,
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl ArrClient {
    /// Create a client from validated configuration.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let id_kind = config.kind.id_kind().ok_or_else(|| {
            FilterError::Config(format!("{} is not a Sonarr or Radarr provider", config.kind))
        })?;
        let http = http_client(config)?;

        Ok(Self {
            kind: config.kind,
            id_kind,
            base_url: config.normalized_url().to_string(),
            api_key: config.api_key.clone(),
            http,
        })
    }

    /// Lookup URL for a catalog id.
    pub fn lookup_url(&self, id: &str) -> Result<Url> {
        let mut params = vec![(self.id_kind.tag(), id)];
        params.extend_from_slice(self.kind.extra_params());

        let endpoint = format!("{}{}", self.base_url, self.kind.lookup_path());
        Url::parse_with_params(&endpoint, &params)
            .map_err(|e| FilterError::Config(format!("Invalid {} URL '{}': {}", self.kind, endpoint, e)))
    }

    /// Fetch the first media resource matching `id`.
    pub async fn fetch_media(&self, id: &CatalogId) -> Result<ArrMedia> {
        let url = self.lookup_url(&id.value)?;
        tracing::info!("Fetching media from {}", url);

        let response = self
            .http
            .get(url.clone())
            .header("X-Api-Key", &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                FilterError::media_not_found(
                    id.to_string(),
                    format!("error while sending request to '{}': {}", url, e),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FilterError::media_not_found(
                id.to_string(),
                format!("failed to fetch media from '{}': {}", url, status),
            ));
        }

        let matches: Vec<ArrMedia> = response.json().await.map_err(|e| {
            FilterError::media_not_found(
                id.to_string(),
                format!("invalid response from '{}': {}", url, e),
            )
        })?;

        matches.into_iter().next().ok_or_else(|| {
            FilterError::media_not_found(
                id.to_string(),
                format!("{} not found in {}", self.kind.media_noun(), self.kind),
            )
        })
    }
}

impl OriginalLanguageSource for ArrClient {
    fn source_name(&self) -> String {
        self.kind.to_string()
    }

    fn lookup_key(&self, path: &str, _title: Option<&str>) -> Result<LookupKey> {
        let kind = self.id_kind;
        CatalogId::from_path(path, kind)
            .map(LookupKey::Catalog)
            .ok_or_else(|| {
                tracing::error!("{} id not found in file name: {}", kind, path);
                FilterError::IdentifierNotFound {
                    path: path.to_string(),
                    kind,
                }
            })
    }

    async fn original_language(&self, key: &LookupKey) -> Result<String> {
        let LookupKey::Catalog(id) = key else {
            return Err(FilterError::Config(format!(
                "{} looks up catalog ids, not {}",
                self.kind, key
            )));
        };
        let media = self.fetch_media(id).await?;
        tracing::debug!(
            "Fetched {} data from {}: {:?}",
            self.kind.media_noun().to_lowercase(),
            self.kind,
            media.title
        );

        let language = media.original_language_name().ok_or_else(|| {
            FilterError::media_not_found(
                id.to_string(),
                format!(
                    "{} '{}' has no original language",
                    self.kind.media_noun(),
                    media.title.as_deref().unwrap_or("?")
                ),
            )
        })?;
        tracing::info!("Found native language in media: {}", language);
        Ok(language.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(kind: ProviderKind, url: &str) -> ProviderConfig {
        ProviderConfig {
            kind,
            api_key: "secret".to_string(),
            base_url: url.to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_sonarr_lookup_url() {
        let client = ArrClient::new(&config(ProviderKind::Sonarr, "http://sonarr:8989/")).unwrap();
        assert_eq!(
            client.lookup_url("12345").unwrap().as_str(),
            "http://sonarr:8989/api/v3/series?tvdbid=12345&includeSeasonImages=false"
        );
    }

    #[test]
    fn test_radarr_lookup_url() {
        let client = ArrClient::new(&config(ProviderKind::Radarr, "https://radarr.example.com")).unwrap();
        assert_eq!(
            client.lookup_url("603").unwrap().as_str(),
            "https://radarr.example.com/api/v3/movie?tmdbid=603&excludeLocalCovers=true"
        );
        assert_eq!(client.id_kind, IdKind::Tmdb);
    }

    #[test]
    fn test_new_rejects_title_search_provider() {
        let cfg = config(ProviderKind::Tmdb, "https://api.themoviedb.org");
        assert!(matches!(ArrClient::new(&cfg), Err(FilterError::Config(_))));
    }

    #[test]
    fn test_lookup_key_from_path() {
        let client = ArrClient::new(&config(ProviderKind::Sonarr, "http://sonarr:8989")).unwrap();
        let key = client
            .lookup_key("/tv/Shogun [tvdbid-392573]/S01E01.mkv", Some("ignored"))
            .unwrap();
        assert_eq!(
            key,
            LookupKey::Catalog(CatalogId {
                kind: IdKind::Tvdb,
                value: "392573".to_string(),
            })
        );
        assert!(matches!(
            client.lookup_key("/tv/Shogun/S01E01.mkv", None),
            Err(FilterError::IdentifierNotFound { kind: IdKind::Tvdb, .. })
        ));
    }

    #[test]
    fn test_new_requires_api_key() {
        let mut cfg = config(ProviderKind::Sonarr, "http://sonarr:8989");
        cfg.api_key.clear();
        assert!(matches!(ArrClient::new(&cfg), Err(FilterError::Config(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_media_not_found() {
        // Port 9 (discard) is almost never listening on loopback.
        let client = ArrClient::new(&config(ProviderKind::Sonarr, "http://127.0.0.1:9")).unwrap();
        let key = LookupKey::Catalog(CatalogId {
            kind: IdKind::Tvdb,
            value: "1".to_string(),
        });
        let err = client.original_language(&key).await.unwrap_err();
        assert!(matches!(err, FilterError::MediaNotFound { .. }));
    }
}
