//! Runtime configuration

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::provider::ProviderKind;

/// Metadata provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Which provider supplies the native language
    pub kind: ProviderKind,

    /// API key for that provider
    pub api_key: String,

    /// Endpoint root, e.g. `http://192.168.1.2:8989`
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            api_key: String::new(),
            base_url: kind.default_url().to_string(),
            timeout_secs: 30,
        }
    }

    /// Base URL without trailing slashes.
    pub fn normalized_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate credentials and URL.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(FilterError::Config(format!(
                "{} API key is not set",
                self.kind
            )));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(FilterError::Config(format!(
                "{} URL must start with http:// or https://, got '{}'",
                self.kind, self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(FilterError::Config("HTTP timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Provider used for lookups
    pub provider: ProviderKind,

    pub sonarr: ProviderConfig,

    pub radarr: ProviderConfig,

    pub tmdb: ProviderConfig,

    pub logging: LoggingConfig,

    /// ffprobe binary used when no probe JSON is supplied
    pub ffprobe: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Sonarr,
            sonarr: ProviderConfig::new(ProviderKind::Sonarr),
            radarr: ProviderConfig::new(ProviderKind::Radarr),
            tmdb: ProviderConfig::new(ProviderKind::Tmdb),
            logging: LoggingConfig::default(),
            ffprobe: "ffprobe".to_string(),
        }
    }
}

/// Values given on the command line, which win over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub provider: Option<ProviderKind>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub ffprobe: Option<String>,
}

impl Config {
    /// Settings of one provider.
    pub fn section(&self, kind: ProviderKind) -> &ProviderConfig {
        match kind {
            ProviderKind::Sonarr => &self.sonarr,
            ProviderKind::Radarr => &self.radarr,
            ProviderKind::Tmdb => &self.tmdb,
        }
    }

    fn section_mut(&mut self, kind: ProviderKind) -> &mut ProviderConfig {
        match kind {
            ProviderKind::Sonarr => &mut self.sonarr,
            ProviderKind::Radarr => &mut self.radarr,
            ProviderKind::Tmdb => &mut self.tmdb,
        }
    }

    /// Settings of the selected provider.
    pub fn provider_config(&self) -> &ProviderConfig {
        self.section(self.provider)
    }

    /// Apply command-line overrides.
    ///
    /// The provider is switched first, so a key or URL given alongside it
    /// lands in the newly selected provider's section.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(kind) = overrides.provider {
            self.provider = kind;
        }
        let selected = self.provider;
        let section = self.section_mut(selected);
        if let Some(key) = overrides.api_key {
            section.api_key = key;
        }
        if let Some(url) = overrides.base_url {
            section.base_url = url;
        }
        if let Some(ffprobe) = overrides.ffprobe {
            self.ffprobe = ffprobe;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.provider_config().validate()
    }
}
