use serde::{Deserialize, Serialize};

use crate::language::canonical_code;

/// Stream kind as reported by the prober
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Audio,
    Subtitle,
    Video,
    Other,
}

impl StreamKind {
    /// Map an ffprobe `codec_type`.
    pub fn from_codec_type(codec_type: &str) -> Self {
        match codec_type {
            "audio" => StreamKind::Audio,
            "subtitle" => StreamKind::Subtitle,
            "video" => StreamKind::Video,
            _ => StreamKind::Other,
        }
    }

    /// Only audio and subtitle streams take part in filtering.
    pub fn is_filtered(&self) -> bool {
        matches!(self, StreamKind::Audio | StreamKind::Subtitle)
    }
}

impl std::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            StreamKind::Audio => "audio",
            StreamKind::Subtitle => "subtitle",
            StreamKind::Video => "video",
            StreamKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// One stream of the source file, plus the decisions taken for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Stream index in source file
    pub index: usize,
    pub kind: StreamKind,
    /// Raw language tag (e.g. "eng", "jpn"), never rewritten
    pub language: Option<String>,
    /// Default disposition as found in the source file
    pub is_default: bool,
    /// Set by the filter pass
    #[serde(default)]
    pub removed: bool,
    /// Overrides `is_default` in the emitted decision when present
    #[serde(default)]
    pub output_default: Option<bool>,
}

impl StreamDescriptor {
    pub fn new(index: usize, kind: StreamKind, language: Option<&str>, is_default: bool) -> Self {
        Self {
            index,
            kind,
            language: language.map(|s| s.to_string()),
            is_default,
            removed: false,
            output_default: None,
        }
    }

    /// The language tag, or `None` for untagged streams. Empty tags and
    /// `und` (undetermined) count as untagged.
    pub fn language_tag(&self) -> Option<&str> {
        match self.language.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(tag) if tag.eq_ignore_ascii_case("und") => None,
            Some(tag) => Some(tag),
        }
    }

    /// Canonical form of the language tag, for comparisons.
    pub fn canonical_language(&self) -> Option<String> {
        self.language_tag().map(canonical_code)
    }

    /// Default state after processing.
    pub fn effective_default(&self) -> bool {
        self.output_default.unwrap_or(self.is_default)
    }

    /// The stream as it exists in the output file: `None` when removed,
    /// otherwise a fresh descriptor whose source default is the effective
    /// default of this one.
    pub fn settled(&self) -> Option<StreamDescriptor> {
        if self.removed {
            return None;
        }
        Some(StreamDescriptor {
            index: self.index,
            kind: self.kind,
            language: self.language.clone(),
            is_default: self.effective_default(),
            removed: false,
            output_default: None,
        })
    }
}

/// Settle a whole processed stream list, dropping removed streams.
pub fn settle_streams(streams: &[StreamDescriptor]) -> Vec<StreamDescriptor> {
    streams.iter().filter_map(StreamDescriptor::settled).collect()
}
