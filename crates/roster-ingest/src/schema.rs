//! Per-load roster schema resolution.

use roster_model::alias::{
    CHARACTER_TAGS_NAMES, CIVITAI_ID_NAMES, GENDER_NAMES, PIXIV_TAG_NAMES, TAGS_RULE_NAMES,
};
use roster_model::{CsvTable, RosterSchema, normalize_name, outfit_suffix};

use crate::error::{IngestError, Result};

/// Finds the first header whose normalized name equals one of `candidates`
/// (also normalized). Returns the header exactly as spelled in the table.
fn resolve_named_column(table: &CsvTable, candidates: &[&str]) -> Option<String> {
    let normalized: Vec<String> = candidates.iter().map(|name| normalize_name(name)).collect();
    table
        .headers
        .iter()
        .find(|header| normalized.contains(&normalize_name(header)))
        .cloned()
}

/// Resolves the character-tags column: exact synonym match first, then any
/// header mentioning both "character" and "tag".
fn resolve_character_tags(table: &CsvTable) -> Result<String> {
    if let Some(found) = resolve_named_column(table, CHARACTER_TAGS_NAMES) {
        return Ok(found);
    }
    table
        .headers
        .iter()
        .find(|header| {
            let normalized = normalize_name(header);
            normalized.contains("character") && normalized.contains("tag")
        })
        .cloned()
        .ok_or_else(|| IngestError::SchemaResolution {
            reason: "no character-tags column found".to_string(),
        })
}

/// Collects outfit columns ordered by slot number.
///
/// The sort is stable, so columns sharing a slot number (including the
/// malformed-suffix ones that count as slot 0) keep their sheet order.
fn resolve_outfit_columns(table: &CsvTable) -> Vec<String> {
    let mut columns: Vec<(u32, String)> = table
        .headers
        .iter()
        .filter_map(|header| outfit_suffix(header).map(|slot| (slot, header.clone())))
        .collect();
    columns.sort_by_key(|(slot, _)| *slot);
    columns.into_iter().map(|(_, header)| header).collect()
}

/// Resolves the full schema for a loaded table.
///
/// Fails only when the character-tags column is missing; every other column
/// is optional and absent ones degrade downstream (empty fields, filter
/// no-ops).
pub fn resolve_schema(table: &CsvTable) -> Result<RosterSchema> {
    Ok(RosterSchema {
        character_tags: resolve_character_tags(table)?,
        tags_rule: resolve_named_column(table, TAGS_RULE_NAMES),
        civitai_id: resolve_named_column(table, CIVITAI_ID_NAMES),
        gender: resolve_named_column(table, GENDER_NAMES),
        pixiv_tag: resolve_named_column(table, PIXIV_TAG_NAMES),
        outfit_columns: resolve_outfit_columns(table),
    })
}
