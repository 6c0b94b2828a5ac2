//! Aliased column resolution.

use roster_model::{ColumnAliasSet, RosterRow, RosterSchema, clean_cell};

/// Resolves one semantic field through its alias set.
///
/// Scans the alias list in order for an exactly-named column with a usable
/// value. Failing that, the positional fallback applies only when the header
/// at that position itself normalizes into the alias set and is not an
/// outfit column; the guard keeps a shifted sheet from silently feeding
/// outfit data (or any unrelated column) into this field.
pub fn resolve_column(
    row: &RosterRow<'_>,
    aliases: &ColumnAliasSet,
    schema: &RosterSchema,
) -> String {
    for alias in aliases.aliases {
        if let Some(value) = row.value(alias) {
            return value.to_string();
        }
    }

    if let Some(index) = aliases.fallback_index
        && let Some(header) = row.header_at(index)
        && aliases.contains_normalized(header)
        && !schema.is_outfit_column(header)
        && let Some(value) = row.cell_at(index).and_then(clean_cell)
    {
        return value.to_string();
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use roster_model::{CsvTable, RosterSchema};

    use super::*;

    fn schema_with_outfits(outfits: &[&str]) -> RosterSchema {
        RosterSchema {
            character_tags: "character_tags".to_string(),
            outfit_columns: outfits.iter().map(|c| (*c).to_string()).collect(),
            ..RosterSchema::default()
        }
    }

    fn table(headers: &[&str], cells: &[&str]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: vec![cells.iter().map(|c| (*c).to_string()).collect()],
        }
    }

    #[test]
    fn first_matching_alias_wins() {
        let table = table(
            &["styleLora", "style_lora", "character_tags"],
            &["", "urn:air:sdxl:lora:civitai:42", "tags"],
        );
        let row = table.row(0).expect("row");
        let resolved = resolve_column(
            &row,
            &ColumnAliasSet::style_lora(),
            &schema_with_outfits(&[]),
        );
        assert_eq!(resolved, "urn:air:sdxl:lora:civitai:42");
    }

    #[test]
    fn nan_values_are_skipped_during_the_scan() {
        let table = table(&["styleName", "style_name"], &["nan", "ghibli style"]);
        let row = table.row(0).expect("row");
        let resolved = resolve_column(
            &row,
            &ColumnAliasSet::style_name(),
            &schema_with_outfits(&[]),
        );
        assert_eq!(resolved, "ghibli style");
    }

    #[test]
    fn fallback_position_applies_for_alias_like_headers() {
        // Header drifted to an alternate alias spelling; no exact alias in
        // the list matches the data-bearing column by value scan order, but
        // position 4 normalizes into the set.
        let table = table(
            &["a", "b", "c", "d", "Item-E", "f"],
            &["", "", "", "", "fallback-value", ""],
        );
        let row = table.row(0).expect("row");
        let resolved = resolve_column(
            &row,
            &ColumnAliasSet::style_lora(),
            &schema_with_outfits(&[]),
        );
        assert_eq!(resolved, "fallback-value");
    }

    #[test]
    fn fallback_rejects_outfit_columns() {
        let table = table(
            &["a", "b", "c", "d", "outfit_4", "f"],
            &["", "", "", "", "blue dress", ""],
        );
        let row = table.row(0).expect("row");
        let resolved = resolve_column(
            &row,
            &ColumnAliasSet::style_lora(),
            &schema_with_outfits(&["outfit_4"]),
        );
        assert_eq!(resolved, "");
    }

    #[test]
    fn fallback_rejects_unrelated_headers() {
        let table = table(
            &["a", "b", "c", "d", "unrelated", "f"],
            &["", "", "", "", "value", ""],
        );
        let row = table.row(0).expect("row");
        let resolved = resolve_column(
            &row,
            &ColumnAliasSet::style_lora(),
            &schema_with_outfits(&[]),
        );
        assert_eq!(resolved, "");
    }

    #[test]
    fn fallback_out_of_range_resolves_empty() {
        let table = table(&["a", "b"], &["", ""]);
        let row = table.row(0).expect("row");
        let resolved = resolve_column(
            &row,
            &ColumnAliasSet::style_lora(),
            &schema_with_outfits(&[]),
        );
        assert_eq!(resolved, "");
    }
}
