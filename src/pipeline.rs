//! Per-file processing: lookup key -> native language -> filter -> reconcile

use crate::decision::DecisionRecord;
use crate::error::Result;
use crate::filter::{filter_streams, reconcile, KeepSet};
use crate::language::{LanguageCode, LanguageResolver};
use crate::probe::ProbedMedia;
use crate::provider::OriginalLanguageSource;
use crate::types::StreamDescriptor;

/// Decide removals and dispositions for a stream list once the native
/// language is known. Runs the filter pass, then the reconcile pass.
pub fn decide(
    source: &str,
    mut streams: Vec<StreamDescriptor>,
    native: LanguageCode,
) -> Result<(DecisionRecord, Vec<StreamDescriptor>)> {
    let keep_set = KeepSet::for_native(native);

    let outcome = filter_streams(source, &mut streams, &keep_set)?;
    let corrections = reconcile(&mut streams, &outcome);
    if !corrections.is_empty() {
        tracing::info!(
            "Cleared {} conflicting default flag(s) in {}",
            corrections.len(),
            source
        );
    }

    let record = DecisionRecord::new(source, &keep_set, &streams, &outcome, corrections);
    Ok((record, streams))
}

/// Full per-file flow against a language source.
pub async fn process_file<S: OriginalLanguageSource>(
    source: &str,
    media: ProbedMedia,
    language_source: &S,
    resolver: &LanguageResolver<'_>,
) -> Result<DecisionRecord> {
    tracing::info!("Running {} strategy for {}", language_source.source_name(), source);

    let key = language_source.lookup_key(source, media.title.as_deref())?;
    let name = language_source.original_language(&key).await?;
    let native = resolver.resolve(&name)?;
    tracing::info!(
        "Native language three-letter code: {} ({})",
        native,
        resolver.table().name_of(native.as_str()).unwrap_or("unknown")
    );

    let (record, _) = decide(source, media.streams, native)?;
    Ok(record.with_origin(language_source.source_name(), key))
}
