//! Rendering style vocabulary.
//!
//! This registry covers the closed catalog of rendering styles and their spellings. The engine
//! rejects unknown spellings at this boundary, so rendering code only ever sees a [`StyleId`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive ASCII**.
//! - This module is vocabulary only (spellings + metadata); the rendering behavior of each style
//!   lives with the engine.
//!
//! ## Examples
//! ```rust
//! use siglum_core::styles::{self, StyleId};
//!
//! assert_eq!(styles::from_str("long-short"), Some(StyleId::LongShort));
//! assert_eq!(styles::from_str("Short-Footnote"), Some(StyleId::ShortFootnote));
//! assert_eq!(styles::as_str(StyleId::LongLong), "long-long");
//! assert_eq!(styles::from_str("banner"), None);
//! ```

/// Stable identifier for rendering styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    LongShort,
    ShortLong,
    LongLong,
    ShortFootnote,
}

/// Metadata for a rendering style.
#[derive(Debug, Clone, Copy)]
pub struct StyleInfo {
    pub id: StyleId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of rendering styles.
pub const STYLES: &[StyleInfo] = &[
    info(
        StyleId::LongShort,
        "long-short",
        &[],
        "First use renders the long form with the short form in parentheses; later uses render the short form.",
    ),
    info(
        StyleId::ShortLong,
        "short-long",
        &[],
        "First use renders the short form with the long form in parentheses; later uses render the short form.",
    ),
    info(
        StyleId::LongLong,
        "long-long",
        &[],
        "Every use renders the long form; first-use state is not consulted.",
    ),
    info(
        StyleId::ShortFootnote,
        "short-footnote",
        &[],
        "Every use renders the short form; the first use attaches a footnote carrying the long form.",
    ),
];

/// Resolve a style name to a [`StyleId`].
///
/// ## Parameters
/// - `name`: Candidate style name (canonical or alias).
///
/// ## Returns
/// - `Some(StyleId)` if the spelling matches this registry.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-insensitive ASCII**.
pub fn from_str(name: &str) -> Option<StyleId> {
    if let Some(s) = STYLES.iter().find(|s| s.canonical.eq_ignore_ascii_case(name)) {
        return Some(s.id);
    }
    STYLES
        .iter()
        .find(|s| s.aliases.iter().any(|a| a.eq_ignore_ascii_case(name)))
        .map(|s| s.id)
}

/// Return the canonical spelling for a rendering style.
pub fn as_str(id: StyleId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a rendering style.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: StyleId) -> &'static StyleInfo {
    STYLES
        .iter()
        .find(|s| s.id == id)
        .expect("style info missing")
}

const fn info(
    id: StyleId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> StyleInfo {
    StyleInfo {
        id,
        canonical,
        aliases,
        description,
    }
}
