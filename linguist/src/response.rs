//! Turning a raw model reply into a [`TranslationResult`]

use crate::model::{GroundingChunk, ModelOutput};
use crate::types::{GroundingLink, TranslationResult};

/// Marker the system instruction asks the model to put before cultural notes
pub const NOTES_SEPARATOR: &str = "---";

/// Title used for citations that come without one
pub const DEFAULT_LINK_TITLE: &str = "Reference Source";

/// Split the reply on the first [`NOTES_SEPARATOR`]
///
/// Returns the trimmed translation and the trimmed notes. Notes are `None`
/// without a separator, or when nothing but whitespace follows it.
pub fn split_notes(raw: &str) -> (String, Option<String>) {
    match raw.split_once(NOTES_SEPARATOR) {
        Some((translation, notes)) => {
            let notes = notes.trim();
            (
                translation.trim().to_string(),
                (!notes.is_empty()).then(|| notes.to_string()),
            )
        }
        None => (raw.trim().to_string(), None),
    }
}

/// Convert web grounding chunks to links, keeping their order
///
/// Chunks without a web reference are skipped and duplicates are kept.
/// Returns `None` rather than an empty list when no link survives.
pub fn extract_grounding_links(chunks: Option<&[GroundingChunk]>) -> Option<Vec<GroundingLink>> {
    let links: Vec<GroundingLink> = chunks?
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| GroundingLink {
            uri: web.uri.clone(),
            title: web
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_LINK_TITLE)
                .to_string(),
        })
        .collect();

    (!links.is_empty()).then_some(links)
}

pub fn parse_model_output(output: &ModelOutput) -> TranslationResult {
    let (translated_text, notes) = split_notes(&output.text);
    TranslationResult {
        translated_text,
        notes,
        grounding_links: extract_grounding_links(output.grounding_chunks.as_deref()),
    }
}
