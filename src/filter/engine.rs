//! Stream filter pass - decides removals and the default audio/subtitle

use serde::{Deserialize, Serialize};

use super::keep_set::KeepSet;
use crate::error::{FilterError, Result};
use crate::language::LanguageCode;
use crate::types::{StreamDescriptor, StreamKind};

/// What the filter pass decided
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOutcome {
    /// Whether any stream was marked removed
    pub removed_any: bool,
    /// Indices of removed streams, in list order
    pub removed: Vec<usize>,
    /// Index of the chosen default audio stream
    pub default_audio: Option<usize>,
    /// Index of the chosen default subtitle stream
    pub default_subtitle: Option<usize>,
}

impl FilterOutcome {
    /// Chosen default for a stream kind, if that kind takes part in filtering.
    pub fn chosen_default(&self, kind: StreamKind) -> Option<usize> {
        match kind {
            StreamKind::Audio => self.default_audio,
            StreamKind::Subtitle => self.default_subtitle,
            _ => None,
        }
    }
}

/// Run the filter pass over `streams` in their delivered order.
///
/// Audio streams tagged with a language outside `keep_set` are removed.
/// The first kept audio stream in the native language becomes the default
/// audio stream and the first English subtitle stream becomes the default
/// subtitle stream. Untagged streams and non audio/subtitle streams are left
/// alone. Fails unless at least one kept audio stream is tagged with a
/// keep-set language; untagged audio does not count.
pub fn filter_streams(
    source: &str,
    streams: &mut [StreamDescriptor],
    keep_set: &KeepSet,
) -> Result<FilterOutcome> {
    tracing::info!("Filtering streams for file: {}", source);
    tracing::info!("Languages to keep: {}", keep_set);

    let english = LanguageCode::english();
    let mut outcome = FilterOutcome::default();
    let mut kept_audio = 0usize;

    for stream in streams.iter_mut() {
        tracing::debug!(
            "Processing {} stream with index '{}'",
            stream.kind,
            stream.index
        );

        if !stream.kind.is_filtered() {
            tracing::debug!("Stream {} is not audio nor subtitle, skipping", stream.index);
            continue;
        }

        let Some(language) = stream.language_tag().map(str::to_string) else {
            tracing::debug!("Stream {} has no language tag, skipping", stream.index);
            continue;
        };

        match stream.kind {
            StreamKind::Audio => {
                if !keep_set.contains_tag(&language) {
                    stream.removed = true;
                    outcome.removed.push(stream.index);
                    tracing::info!(
                        "Removed audio stream with index '{}' and language '{}'",
                        stream.index,
                        language
                    );
                    continue;
                }

                kept_audio += 1;
                if outcome.default_audio.is_none() && keep_set.native().matches_tag(&language) {
                    stream.output_default = Some(true);
                    outcome.default_audio = Some(stream.index);
                    tracing::info!(
                        "Setting default audio stream with index '{}' and language '{}'",
                        stream.index,
                        language
                    );
                }
            }
            StreamKind::Subtitle => {
                if outcome.default_subtitle.is_none() && english.matches_tag(&language) {
                    stream.output_default = Some(true);
                    outcome.default_subtitle = Some(stream.index);
                    tracing::info!(
                        "Setting default subtitle stream with index '{}' and language '{}'",
                        stream.index,
                        language
                    );
                }
            }
            StreamKind::Video | StreamKind::Other => {}
        }

        tracing::debug!(
            "Keeping {} stream with index '{}' and language '{}'",
            stream.kind,
            stream.index,
            language
        );
    }

    outcome.removed_any = !outcome.removed.is_empty();

    if kept_audio == 0 {
        tracing::error!(
            "No audio stream left in {} after filtering (removed: {:?})",
            source,
            outcome.removed
        );
        return Err(FilterError::NoValidAudioTrack {
            path: source.to_string(),
            removed: outcome.removed,
        });
    }

    if !outcome.removed_any {
        tracing::info!("No streams were removed from {}. No work needs to be done.", source);
    }

    Ok(outcome)
}
