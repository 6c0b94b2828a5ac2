//! Column alias configuration and name normalization.
//!
//! Roster spreadsheets have drifted across revisions: the same semantic
//! field appears under different spellings, casings, and export artifacts
//! (`styleLora`, `style_lora_uri`, `Unnamed: 4`, ...). Alias sets model that
//! drift as explicit configuration data instead of scattered conditionals.

/// Normalizes a column name for comparison: trimmed, lowercased, with
/// `_`/`-`/`.`/`/` separators folded to single spaces.
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the outfit-slot number when `name` is an outfit column.
///
/// Outfit columns follow the `outfit_<n>` pattern (any separator, any case).
/// A missing or non-numeric suffix counts as slot 0 so malformed outfit
/// headers still sort ahead of real slots instead of being dropped.
pub fn outfit_suffix(name: &str) -> Option<u32> {
    let normalized = normalize_name(name);
    let rest = normalized.strip_prefix("outfit")?;
    if rest.is_empty() {
        return Some(0);
    }
    // Reject unrelated words sharing the prefix ("outfitter").
    if !rest.starts_with(' ') && !rest.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(rest.trim().parse::<u32>().unwrap_or(0))
}

/// An ordered list of acceptable spellings for one semantic column, plus an
/// optional positional fallback for sheets whose headers were lost entirely.
#[derive(Debug, Clone, Copy)]
pub struct ColumnAliasSet {
    pub aliases: &'static [&'static str],
    pub fallback_index: Option<usize>,
}

impl ColumnAliasSet {
    /// True when `name` normalizes to one of the aliases.
    pub fn contains_normalized(&self, name: &str) -> bool {
        let normalized = normalize_name(name);
        self.aliases
            .iter()
            .any(|alias| normalize_name(alias) == normalized)
    }

    /// Aliases for the style-LoRA identifier column.
    pub fn style_lora() -> Self {
        Self {
            aliases: &[
                "styleLora",
                "style_lora",
                "style_lora_id",
                "style_lora_uri",
                "Unnamed: 4",
                "coluna_e",
                "Column E",
                "column_e",
                "Coluna E",
                "E",
                "e",
                "item_e",
                "Item E",
                "column5",
            ],
            fallback_index: Some(4),
        }
    }

    /// Aliases for the style display-name column.
    pub fn style_name() -> Self {
        Self {
            aliases: &[
                "styleName",
                "style_name",
                "styleLoraName",
                "style_lora_name",
                "Unnamed: 5",
                "coluna_f",
                "Column F",
                "column_f",
                "Coluna F",
                "F",
                "f",
                "item_f",
                "Item F",
                "column6",
            ],
            fallback_index: Some(5),
        }
    }
}

/// Accepted spellings for the free-text rule column.
pub const TAGS_RULE_NAMES: &[&str] = &["TAGS RULE", "tags_rule", "rule"];

/// Accepted spellings for the character identifier column.
pub const CIVITAI_ID_NAMES: &[&str] = &["CIVITAI ID", "civitai_id", "civitai"];

/// Exact-match synonyms for the character-tags column; resolution falls back
/// to any header containing both "character" and "tag".
pub const CHARACTER_TAGS_NAMES: &[&str] = &[
    "character_tags",
    "character tags",
    "charactertags",
    "char_tags",
];

/// Accepted spellings for the categorical gender column.
pub const GENDER_NAMES: &[&str] = &["sexo", "sex", "gender"];

/// Accepted spellings for the pixiv tag column.
pub const PIXIV_TAG_NAMES: &[&str] = &["pixiv_tag", "pixiv tag", "pixiv"];
