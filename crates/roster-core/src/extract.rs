//! Output-record assembly for a selected row.

use rand::rngs::StdRng;

use roster_model::{CharacterRecord, ColumnAliasSet, Roster};

use crate::normalize::normalize_identifier;
use crate::outfits::{collect_outfit_pool, sample_outfits};
use crate::resolve::resolve_column;

/// Builds the output record for the selected row.
///
/// Field behavior mirrors the host contract: absent columns become empty
/// strings, the identifier fields are normalized, and outfits are sampled
/// from the row's pool with the shared per-call generator.
pub fn extract_record(
    rng: &mut StdRng,
    roster: &Roster,
    row_index: usize,
    quantity: usize,
) -> CharacterRecord {
    let Some(row) = roster.row(row_index) else {
        return CharacterRecord::default();
    };
    let schema = &roster.schema;

    let tags_rule = schema
        .tags_rule
        .as_deref()
        .and_then(|column| row.get(column))
        .unwrap_or_default()
        .to_string();
    let civitai_id = schema
        .civitai_id
        .as_deref()
        .and_then(|column| row.get(column))
        .map(normalize_identifier)
        .unwrap_or_default();
    let character_tags = row
        .get(&schema.character_tags)
        .unwrap_or_default()
        .to_string();
    let pixiv_tag = schema
        .pixiv_tag
        .as_deref()
        .and_then(|column| row.value(column))
        .unwrap_or_default()
        .to_string();

    let item_e_raw = resolve_column(&row, &ColumnAliasSet::style_lora(), schema);
    let item_f = resolve_column(&row, &ColumnAliasSet::style_name(), schema);
    let item_e = normalize_identifier(&item_e_raw);

    let pool = collect_outfit_pool(&row, &schema.outfit_columns);
    let outfits = sample_outfits(rng, &pool, quantity);

    CharacterRecord {
        tags_rule,
        civitai_id,
        character_tags,
        outfits,
        pixiv_tag,
        item_e,
        item_f,
    }
}
