//! Post-processing invariants over every fixture layout

use std::collections::HashMap;

use super::fixtures::TestLayout;
use crate::filter::{filter_streams, reconcile, KeepSet};
use crate::language::LanguageCode;
use crate::pipeline::decide;
use crate::types::{settle_streams, StreamDescriptor, StreamKind};

fn processed() -> Vec<(TestLayout, Vec<StreamDescriptor>)> {
    TestLayout::all()
        .into_iter()
        .map(|layout| {
            let (_, streams) = decide(
                layout.name,
                layout.streams.clone(),
                LanguageCode::new(layout.native),
            )
            .unwrap();
            (layout, streams)
        })
        .collect()
}

#[test]
fn test_removed_streams_are_foreign_audio() {
    for (layout, streams) in processed() {
        let keep = KeepSet::for_native(LanguageCode::new(layout.native));
        for s in streams.iter().filter(|s| s.removed) {
            assert_eq!(s.kind, StreamKind::Audio, "{}: stream {}", layout.name, s.index);
            let tag = s.language_tag().unwrap();
            assert!(!keep.contains_tag(tag), "{}: stream {}", layout.name, s.index);
        }
    }
}

#[test]
fn test_at_most_one_default_per_kind() {
    for (layout, streams) in processed() {
        let mut defaults: HashMap<StreamKind, usize> = HashMap::new();
        for s in streams.iter().filter(|s| !s.removed && s.effective_default()) {
            *defaults.entry(s.kind).or_default() += 1;
        }
        for kind in [StreamKind::Audio, StreamKind::Subtitle] {
            assert!(
                defaults.get(&kind).copied().unwrap_or(0) <= 1,
                "{}: more than one default {}",
                layout.name,
                kind
            );
        }
    }
}

#[test]
fn test_first_native_audio_and_english_subtitle_are_default() {
    for (layout, streams) in processed() {
        let native = LanguageCode::new(layout.native);
        let english = LanguageCode::english();
        let tagged = |kind: StreamKind, code: &LanguageCode| {
            streams
                .iter()
                .filter(|s| s.kind == kind && !s.removed)
                .find(|s| s.language_tag().map(|t| code.matches_tag(t)).unwrap_or(false))
                .map(|s| s.index)
        };

        if let Some(index) = tagged(StreamKind::Audio, &native) {
            let s = streams.iter().find(|s| s.index == index).unwrap();
            assert!(s.effective_default(), "{}: audio {}", layout.name, index);
        }
        if let Some(index) = tagged(StreamKind::Subtitle, &english) {
            let s = streams.iter().find(|s| s.index == index).unwrap();
            assert!(s.effective_default(), "{}: subtitle {}", layout.name, index);
        }
    }
}

#[test]
fn test_languages_are_never_rewritten() {
    for layout in TestLayout::all() {
        let before: Vec<Option<String>> =
            layout.streams.iter().map(|s| s.language.clone()).collect();
        let (_, streams) = decide(
            layout.name,
            layout.streams.clone(),
            LanguageCode::new(layout.native),
        )
        .unwrap();
        let after: Vec<Option<String>> = streams.iter().map(|s| s.language.clone()).collect();
        assert_eq!(before, after, "{}", layout.name);
    }
}

#[test]
fn test_second_run_needs_no_corrections() {
    for (layout, streams) in processed() {
        let keep = KeepSet::for_native(LanguageCode::new(layout.native));
        let mut settled = settle_streams(&streams);

        let outcome = filter_streams(layout.name, &mut settled, &keep).unwrap();
        let corrections = reconcile(&mut settled, &outcome);

        assert!(!outcome.removed_any, "{}", layout.name);
        assert!(corrections.is_empty(), "{}: {:?}", layout.name, corrections);
    }
}
