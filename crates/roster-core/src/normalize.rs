//! Identifier normalization.
//!
//! Character identifiers arrive in several prefix conventions accumulated
//! over spreadsheet revisions: full asset URNs, `civitai:`/`civitai/`
//! locators, generic URNs, or already-bare suffixes. Normalization strips
//! whichever convention applies and returns the bare suffix.

use roster_model::clean_cell;

/// The full asset URN prefix used by current sheet revisions.
pub const CIVITAI_URN_PREFIX: &str = "urn:air:sdxl:lora:civitai:";

/// Normalizes an identifier with the default URN prefix.
pub fn normalize_identifier(raw: &str) -> String {
    normalize_identifier_with_prefix(raw, CIVITAI_URN_PREFIX)
}

/// Normalizes an identifier against an explicit prefix convention.
///
/// Rules apply in priority order and are mutually exclusive; only the first
/// matching rule runs:
/// 1. blank or "nan" input yields the empty string;
/// 2. an exact `prefix` match is stripped;
/// 3. everything after the first `civitai:` is kept;
/// 4. everything after the first `civitai/` is kept;
/// 5. a `urn:`-style value keeps the segment after its last colon;
/// 6. anything else is returned trimmed, unchanged.
pub fn normalize_identifier_with_prefix(raw: &str, prefix: &str) -> String {
    let Some(value) = clean_cell(raw) else {
        return String::new();
    };

    if !prefix.is_empty()
        && let Some(stripped) = value.strip_prefix(prefix)
    {
        return stripped.to_string();
    }
    if let Some((_, rest)) = value.split_once("civitai:") {
        return rest.to_string();
    }
    if let Some((_, rest)) = value.split_once("civitai/") {
        return rest.to_string();
    }
    if value.starts_with("urn:")
        && let Some((_, rest)) = value.rsplit_once(':')
    {
        return rest.to_string();
    }
    value.to_string()
}
