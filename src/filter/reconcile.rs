//! Disposition reconciliation - keeps a single default per stream kind

use serde::{Deserialize, Serialize};

use super::engine::FilterOutcome;
use crate::types::{StreamDescriptor, StreamKind};

/// A default flag the command builder has to rewrite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispositionCorrection {
    pub index: usize,
    pub kind: StreamKind,
    /// New default state (always `false` today)
    pub default: bool,
}

/// Clear source default flags that conflict with the filter pass's choices.
///
/// Must run after [`super::filter_streams`]. A non-removed stream flagged
/// default in the source whose index is not the chosen default of its kind
/// gets `output_default = Some(false)` and a correction. When the filter
/// chose nothing for a kind, the first source default of that kind is kept
/// and later ones are cleared. Removed streams are never touched.
pub fn reconcile(
    streams: &mut [StreamDescriptor],
    outcome: &FilterOutcome,
) -> Vec<DispositionCorrection> {
    let mut corrections = Vec::new();
    let mut default_audio = outcome.chosen_default(StreamKind::Audio);
    let mut default_subtitle = outcome.chosen_default(StreamKind::Subtitle);

    for stream in streams.iter_mut() {
        if stream.removed || !stream.is_default {
            continue;
        }

        let chosen = match stream.kind {
            StreamKind::Audio => &mut default_audio,
            StreamKind::Subtitle => &mut default_subtitle,
            StreamKind::Video | StreamKind::Other => continue,
        };

        tracing::debug!(
            "Found default {} stream '{}' with language '{}'",
            stream.kind,
            stream.index,
            stream.language.as_deref().unwrap_or("none")
        );

        let current = *chosen;
        match current {
            Some(index) if index == stream.index => {}
            Some(index) => {
                tracing::warn!(
                    "Default {} stream '{}' differs from chosen stream '{}'. Clearing...",
                    stream.kind,
                    stream.index,
                    index
                );
                stream.output_default = Some(false);
                corrections.push(DispositionCorrection {
                    index: stream.index,
                    kind: stream.kind,
                    default: false,
                });
            }
            None => {
                tracing::debug!(
                    "No {} default was chosen, keeping source default '{}'",
                    stream.kind,
                    stream.index
                );
                *chosen = Some(stream.index);
            }
        }
    }

    corrections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(index: usize, kind: StreamKind, language: Option<&str>, default: bool) -> StreamDescriptor {
        StreamDescriptor::new(index, kind, language, default)
    }

    #[test]
    fn test_clears_conflicting_audio_default() {
        let mut streams = vec![
            stream(0, StreamKind::Audio, Some("eng"), true),
            stream(1, StreamKind::Audio, Some("jpn"), false),
        ];
        let outcome = FilterOutcome {
            default_audio: Some(1),
            ..Default::default()
        };
        let corrections = reconcile(&mut streams, &outcome);

        assert_eq!(
            corrections,
            vec![DispositionCorrection {
                index: 0,
                kind: StreamKind::Audio,
                default: false
            }]
        );
        assert_eq!(streams[0].output_default, Some(false));
    }

    #[test]
    fn test_chosen_stream_already_default_needs_no_correction() {
        let mut streams = vec![
            stream(0, StreamKind::Audio, Some("jpn"), true),
            stream(1, StreamKind::Subtitle, Some("eng"), true),
        ];
        let outcome = FilterOutcome {
            default_audio: Some(0),
            default_subtitle: Some(1),
            ..Default::default()
        };
        assert!(reconcile(&mut streams, &outcome).is_empty());
    }

    #[test]
    fn test_removed_streams_are_ignored() {
        let mut streams = vec![
            stream(0, StreamKind::Audio, Some("fre"), true),
            stream(1, StreamKind::Audio, Some("jpn"), false),
        ];
        streams[0].removed = true;
        let outcome = FilterOutcome {
            removed_any: true,
            removed: vec![0],
            default_audio: Some(1),
            ..Default::default()
        };
        assert!(reconcile(&mut streams, &outcome).is_empty());
        assert_eq!(streams[0].output_default, None);
    }

    #[test]
    fn test_without_choice_first_source_default_is_kept() {
        let mut streams = vec![
            stream(0, StreamKind::Audio, Some("eng"), false),
            stream(1, StreamKind::Subtitle, Some("spa"), true),
            stream(2, StreamKind::Subtitle, Some("jpn"), true),
        ];
        let corrections = reconcile(&mut streams, &FilterOutcome::default());
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].index, 2);
        assert_eq!(streams[1].output_default, None);
    }

    #[test]
    fn test_video_defaults_are_left_alone() {
        let mut streams = vec![
            stream(0, StreamKind::Video, None, true),
            stream(1, StreamKind::Video, None, true),
        ];
        assert!(reconcile(&mut streams, &FilterOutcome::default()).is_empty());
    }
}
