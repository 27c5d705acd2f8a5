//! Stream probing
//!
//! Builds the ordered [`StreamDescriptor`] list for a file from ffprobe's
//! JSON output:
//! - `codec_type` -> stream kind
//! - `tags.language` -> language tag
//! - `disposition.default` -> source default flag
//!
//! The container title (`format.tags.title`, else the first stream title)
//! is kept for title-based language lookups.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FilterError, Result};
use crate::types::{StreamDescriptor, StreamKind};

/// Top level of `ffprobe -show_format -show_streams -of json`
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub format: Option<ProbeFormat>,
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFormat {
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeStream {
    pub index: usize,
    #[serde(default)]
    pub codec_type: Option<String>,
    #[serde(default)]
    pub codec_name: Option<String>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default)]
    pub disposition: Option<ProbeDisposition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeDisposition {
    #[serde(default)]
    pub default: u8,
}

/// Streams and title of one probed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedMedia {
    pub title: Option<String>,
    pub streams: Vec<StreamDescriptor>,
}

/// Tag lookup ignoring key case; matroska files sometimes carry `LANGUAGE`
/// or `TITLE`.
fn tag<'a>(tags: Option<&'a HashMap<String, String>>, key: &str) -> Option<&'a str> {
    tags?
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str())
}

fn title_tag(tags: Option<&HashMap<String, String>>) -> Option<&str> {
    tag(tags, "title").map(str::trim).filter(|t| !t.is_empty())
}

impl ProbeOutput {
    /// Container title, falling back to the first stream carrying a title.
    pub fn title(&self) -> Option<&str> {
        title_tag(self.format.as_ref().and_then(|f| f.tags.as_ref()))
            .or_else(|| self.streams.iter().find_map(|s| title_tag(s.tags.as_ref())))
    }
}

impl ProbeStream {
    fn language(&self) -> Option<&str> {
        tag(self.tags.as_ref(), "language")
    }

    fn to_descriptor(&self) -> StreamDescriptor {
        let kind = self
            .codec_type
            .as_deref()
            .map(StreamKind::from_codec_type)
            .unwrap_or(StreamKind::Other);
        let is_default = self.disposition.as_ref().map(|d| d.default == 1).unwrap_or(false);
        StreamDescriptor::new(self.index, kind, self.language(), is_default)
    }
}

/// Map ffprobe JSON to descriptors, preserving stream order.
pub fn parse_probe_output(json: &str) -> Result<ProbedMedia> {
    let output: ProbeOutput = serde_json::from_str(json)?;
    let streams: Vec<StreamDescriptor> =
        output.streams.iter().map(ProbeStream::to_descriptor).collect();
    let title = output.title().map(str::to_string);

    for s in &streams {
        tracing::debug!(
            "Probed {} stream {} (language={}, default={})",
            s.kind,
            s.index,
            s.language.as_deref().unwrap_or("none"),
            s.is_default
        );
    }
    if let Some(title) = &title {
        tracing::debug!("Probed title: {}", title);
    }
    Ok(ProbedMedia { title, streams })
}

/// Read a previously captured ffprobe JSON file.
pub fn load_probe_file<P: AsRef<Path>>(path: P) -> Result<ProbedMedia> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_probe_output(&content)
}

/// Run ffprobe on `media` and parse its format and stream list.
pub async fn probe_file(ffprobe: &str, media: &Path) -> Result<ProbedMedia> {
    let media_name = media.display().to_string();
    tracing::debug!("Running {} on {}", ffprobe, media_name);

    let output = tokio::process::Command::new(ffprobe)
        .arg("-v")
        .arg("error")
        .arg("-show_format")
        .arg("-show_streams")
        .arg("-of")
        .arg("json")
        .arg(media)
        .output()
        .await
        .map_err(|e| FilterError::Probe {
            path: media_name.clone(),
            reason: format!("failed to run {}: {}", ffprobe, e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FilterError::Probe {
            path: media_name,
            reason: format!("{} exited with {}: {}", ffprobe, output.status, stderr.trim()),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_probe_output(&stdout).map_err(|e| FilterError::Probe {
        path: media_name,
        reason: e.to_string(),
    })
}
