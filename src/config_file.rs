//! Configuration file support
//!
//! Loads provider and logging configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{Config, LogFormat, LoggingConfig, ProviderConfig};
use crate::error::{FilterError, Result};
use crate::provider::ProviderKind;

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Selected provider ("sonarr", "radarr" or "tmdb")
    pub provider: ProviderKind,
    /// Sonarr settings
    pub sonarr: Option<ProviderSettings>,
    /// Radarr settings
    pub radarr: Option<ProviderSettings>,
    /// TMDB settings; `api_key` holds the API read access token
    pub tmdb: Option<ProviderSettings>,
    /// HTTP client settings
    pub http: Option<HttpSettings>,
    /// Probe settings
    pub probe: Option<ProbeSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API key
    #[serde(default)]
    pub api_key: String,
    /// Full URL, e.g. https://sonarr.example.com
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSettings {
    /// ffprobe binary
    pub ffprobe: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<LogFormat>,
}

impl ProviderSettings {
    fn default_for(kind: ProviderKind) -> Self {
        Self {
            api_key: String::new(),
            url: Some(kind.default_url().to_string()),
        }
    }
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| FilterError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            provider: ProviderKind::Sonarr,
            sonarr: Some(ProviderSettings::default_for(ProviderKind::Sonarr)),
            radarr: Some(ProviderSettings::default_for(ProviderKind::Radarr)),
            tmdb: Some(ProviderSettings::default_for(ProviderKind::Tmdb)),
            http: Some(HttpSettings {
                timeout_secs: Some(30),
            }),
            probe: Some(ProbeSettings {
                ffprobe: Some("ffprobe".to_string()),
            }),
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some(LogFormat::Pretty),
            }),
        }
    }

    /// Convert to Config, keeping every provider section
    pub fn into_config(self) -> Config {
        let timeout = self.http.and_then(|h| h.timeout_secs);
        let section = |kind: ProviderKind, settings: Option<ProviderSettings>| {
            let mut provider = ProviderConfig::new(kind);
            if let Some(settings) = settings {
                provider.api_key = settings.api_key;
                if let Some(url) = settings.url {
                    provider.base_url = url;
                }
            }
            if let Some(timeout) = timeout {
                provider.timeout_secs = timeout;
            }
            provider
        };

        let defaults = LoggingConfig::default();
        let logging = self
            .logging
            .map(|l| LoggingConfig {
                level: l.level,
                format: l.format.unwrap_or(defaults.format),
            })
            .unwrap_or(defaults);

        Config {
            provider: self.provider,
            sonarr: section(ProviderKind::Sonarr, self.sonarr),
            radarr: section(ProviderKind::Radarr, self.radarr),
            tmdb: section(ProviderKind::Tmdb, self.tmdb),
            logging,
            ffprobe: self
                .probe
                .and_then(|p| p.ffprobe)
                .unwrap_or_else(|| "ffprobe".to_string()),
        }
    }
}

/// Generate default configuration file at the specified path.
///
/// Refuses to replace an existing file.
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(FilterError::Config(format!(
            "{} already exists, not overwriting it",
            path.display()
        )));
    }
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOverrides;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default_config();
        assert_eq!(config.provider, ProviderKind::Sonarr);
        assert_eq!(
            config.radarr.unwrap().url.as_deref(),
            Some("http://192.168.1.2:7878")
        );
    }

    #[test]
    fn test_config_file_roundtrip() {
        let config = ConfigFile::default_config();

        let mut temp_file = NamedTempFile::new().unwrap();
        let content = toml::to_string_pretty(&config).unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let loaded = ConfigFile::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.provider, config.provider);
        assert_eq!(loaded.http.unwrap().timeout_secs, Some(30));
    }

    #[test]
    fn test_into_config_picks_selected_provider() {
        let config = ConfigFile::from_toml(
            r#"
            provider = "radarr"

            [sonarr]
            api_key = "sonarr-key"

            [radarr]
            api_key = "radarr-key"
            url = "https://radarr.example.com"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap()
        .into_config();

        assert_eq!(config.provider, ProviderKind::Radarr);
        assert_eq!(config.provider_config().api_key, "radarr-key");
        assert_eq!(config.provider_config().base_url, "https://radarr.example.com");
        assert_eq!(config.provider_config().timeout_secs, 30);
        assert_eq!(config.sonarr.api_key, "sonarr-key");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = ConfigFile::from_toml("provider = \"sonarr\"")
            .unwrap()
            .into_config();
        assert_eq!(config.provider_config().base_url, "http://192.168.1.2:8989");
        assert!(config.provider_config().api_key.is_empty());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_provider_override_uses_file_section() {
        let config = ConfigFile::from_toml(
            r#"
            provider = "sonarr"

            [sonarr]
            api_key = "sonarr-key"

            [radarr]
            api_key = "radarr-key"
            url = "https://radarr.example.com"

            [http]
            timeout_secs = 10
            "#,
        )
        .unwrap()
        .into_config()
        .with_overrides(ConfigOverrides {
            provider: Some(ProviderKind::Radarr),
            ..Default::default()
        });

        assert_eq!(config.provider_config().kind, ProviderKind::Radarr);
        assert_eq!(config.provider_config().api_key, "radarr-key");
        assert_eq!(config.provider_config().base_url, "https://radarr.example.com");
        assert_eq!(config.provider_config().timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tmdb_section() {
        let config = ConfigFile::from_toml(
            r#"
            provider = "tmdb"

            [tmdb]
            api_key = "read-token"
            "#,
        )
        .unwrap()
        .into_config();

        assert_eq!(config.provider, ProviderKind::Tmdb);
        assert_eq!(config.provider_config().api_key, "read-token");
        assert_eq!(config.provider_config().base_url, "https://api.themoviedb.org");
    }

    #[test]
    fn test_unknown_provider_is_config_error() {
        assert!(matches!(
            ConfigFile::from_toml("provider = \"plex\""),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_generate_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        generate_default_config(&path).unwrap();

        let loaded = ConfigFile::from_file(&path).unwrap();
        assert_eq!(loaded.provider, ProviderKind::Sonarr);
        assert!(loaded.tmdb.is_some());
    }

    #[test]
    fn test_generate_default_config_keeps_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"provider = \"radarr\"\n").unwrap();

        let err = generate_default_config(temp_file.path()).unwrap_err();
        assert!(matches!(err, FilterError::Config(ref m) if m.contains("already exists")));

        let loaded = ConfigFile::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.provider, ProviderKind::Radarr);
    }
}
