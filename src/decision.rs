//! Decision record handed to the command builder

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::{DispositionCorrection, FilterOutcome, KeepSet};
use crate::identifier::LookupKey;
use crate::language::LanguageCode;
use crate::types::{StreamDescriptor, StreamKind};

/// Per-stream outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDecision {
    pub index: usize,
    pub kind: StreamKind,
    pub removed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_default: Option<bool>,
}

impl From<&StreamDescriptor> for StreamDecision {
    fn from(stream: &StreamDescriptor) -> Self {
        Self {
            index: stream.index,
            kind: stream.kind,
            removed: stream.removed,
            output_default: stream.output_default,
        }
    }
}

/// Everything decided for one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Source file path
    pub source: String,
    /// Provider that supplied the native language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Catalog id or title the provider was asked about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<LookupKey>,
    pub native_language: LanguageCode,
    pub keep_set: Vec<LanguageCode>,
    /// Whether anything was removed, i.e. whether a transcode is needed
    pub removed_any: bool,
    /// Index of the default audio stream (the native audio index)
    pub default_audio: Option<usize>,
    pub default_subtitle: Option<usize>,
    /// Stream decisions in source order
    pub streams: Vec<StreamDecision>,
    pub corrections: Vec<DispositionCorrection>,
    pub decided_at: DateTime<Utc>,
}

impl DecisionRecord {
    /// Assemble a record from the processed streams.
    pub fn new(
        source: &str,
        keep_set: &KeepSet,
        streams: &[StreamDescriptor],
        outcome: &FilterOutcome,
        corrections: Vec<DispositionCorrection>,
    ) -> Self {
        Self {
            source: source.to_string(),
            provider: None,
            lookup: None,
            native_language: keep_set.native().clone(),
            keep_set: keep_set.codes().to_vec(),
            removed_any: outcome.removed_any,
            default_audio: outcome.default_audio,
            default_subtitle: outcome.default_subtitle,
            streams: streams.iter().map(StreamDecision::from).collect(),
            corrections,
            decided_at: Utc::now(),
        }
    }

    /// Attach where the native language came from.
    pub fn with_origin(mut self, provider: String, lookup: LookupKey) -> Self {
        self.provider = Some(provider);
        self.lookup = Some(lookup);
        self
    }

    /// Whether the command builder has anything to do.
    pub fn needs_work(&self) -> bool {
        self.removed_any
    }

    /// Indices of removed streams.
    pub fn removed_indices(&self) -> Vec<usize> {
        self.streams
            .iter()
            .filter(|s| s.removed)
            .map(|s| s.index)
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the record as JSON.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        tracing::debug!("Wrote decision record to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DecisionRecord {
        let mut streams = vec![
            StreamDescriptor::new(0, StreamKind::Audio, Some("fre"), true),
            StreamDescriptor::new(1, StreamKind::Audio, Some("jpn"), false),
        ];
        streams[0].removed = true;
        streams[1].output_default = Some(true);
        let outcome = FilterOutcome {
            removed_any: true,
            removed: vec![0],
            default_audio: Some(1),
            default_subtitle: None,
        };
        let keep = KeepSet::for_native(LanguageCode::new("jpn"));
        DecisionRecord::new("a.mkv", &keep, &streams, &outcome, Vec::new())
    }

    #[test]
    fn test_record_summary() {
        let record = sample();
        assert!(record.needs_work());
        assert_eq!(record.removed_indices(), vec![0]);
        assert_eq!(record.native_language.as_str(), "jpn");
        assert_eq!(record.keep_set.len(), 2);
        assert_eq!(record.streams[1].output_default, Some(true));
    }

    #[test]
    fn test_record_json_omits_unset_default() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["native_language"], "jpn");
        assert_eq!(value["streams"][0]["kind"], "audio");
        assert!(value["streams"][0].get("output_default").is_none());
        assert_eq!(value["streams"][1]["output_default"], true);
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decision.json");
        sample().write_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: DecisionRecord = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.source, "a.mkv");
        assert_eq!(loaded.default_audio, Some(1));
    }

    #[test]
    fn test_record_carries_lookup() {
        let record = sample().with_origin("TMDB".to_string(), LookupKey::Title("Shogun".to_string()));
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["provider"], "TMDB");
        assert_eq!(value["lookup"]["title"], "Shogun");
    }
}
