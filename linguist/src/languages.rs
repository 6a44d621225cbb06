//! Catalog of selectable target languages
//!
//! Display names only. The model receives the name verbatim, so there are no
//! locale codes to normalize.

/// Target language preselected by the front ends
pub const DEFAULT_TARGET_LANGUAGE: &str = "Spanish";

/// All selectable target languages, sorted
pub const LANGUAGES: &[&str] = &[
    "Amharic",
    "Arabic",
    "Bengali",
    "Chinese (Mandarin)",
    "Danish",
    "Dutch",
    "English",
    "Finnish",
    "French",
    "German",
    "Greek",
    "Hebrew",
    "Hindi",
    "Indonesian",
    "Italian",
    "Japanese",
    "Korean",
    "Malay",
    "Norwegian",
    "Persian",
    "Polish",
    "Portuguese",
    "Russian",
    "Spanish",
    "Swahili",
    "Swedish",
    "Thai",
    "Turkish",
    "Urdu",
    "Vietnamese",
    "Zulu",
];

/// Check whether `name` is one of the catalog entries (exact match)
pub fn is_supported(name: &str) -> bool {
    LANGUAGES.binary_search(&name).is_ok()
}
