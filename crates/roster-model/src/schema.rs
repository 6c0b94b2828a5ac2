//! Resolved roster schema.

use crate::alias::outfit_suffix;

/// Column names resolved against one loaded table.
///
/// Only the character-tags column is required; the rest degrade to empty
/// output fields (or to filter no-ops) when the sheet lacks them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterSchema {
    /// Resolved character-tags column (required).
    pub character_tags: String,
    /// Resolved free-text rule column, when present.
    pub tags_rule: Option<String>,
    /// Resolved character identifier column, when present.
    pub civitai_id: Option<String>,
    /// Resolved gender column, when present.
    pub gender: Option<String>,
    /// Resolved pixiv tag column, when present.
    pub pixiv_tag: Option<String>,
    /// Outfit columns in ascending slot order.
    pub outfit_columns: Vec<String>,
}

impl RosterSchema {
    /// True when `name` is one of this roster's outfit columns or follows
    /// the outfit naming pattern.
    pub fn is_outfit_column(&self, name: &str) -> bool {
        self.outfit_columns.iter().any(|column| column == name) || outfit_suffix(name).is_some()
    }
}
