//! The output record handed back to the host pipeline.

use serde::{Deserialize, Serialize};

/// Message placed in `tags_rule` when the filters match no row.
pub const NO_MATCH_MESSAGE: &str = "No character matched the active filters";

/// One picked character, flattened to the fixed seven-field host contract.
///
/// Every field defaults to empty; the host always receives a well-formed
/// record even on a filter miss or an internal failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub tags_rule: String,
    pub civitai_id: String,
    pub character_tags: String,
    pub outfits: Vec<String>,
    pub pixiv_tag: String,
    pub item_e: String,
    pub item_f: String,
}

impl CharacterRecord {
    /// The distinguished record for a selection whose filters matched
    /// nothing. A miss is a normal outcome, not an error.
    pub fn filter_miss() -> Self {
        Self {
            tags_rule: NO_MATCH_MESSAGE.to_string(),
            ..Self::default()
        }
    }

    /// The degraded record emitted when an internal failure was suppressed
    /// at the invocation boundary; the failure text rides in `tags_rule`.
    pub fn degraded(message: &str) -> Self {
        Self {
            tags_rule: message.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_miss_is_empty_except_message() {
        let record = CharacterRecord::filter_miss();
        assert_eq!(record.tags_rule, NO_MATCH_MESSAGE);
        assert!(record.civitai_id.is_empty());
        assert!(record.outfits.is_empty());
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = CharacterRecord {
            tags_rule: "naruto".to_string(),
            civitai_id: "123".to_string(),
            character_tags: "uzumaki_naruto".to_string(),
            outfits: vec!["orange jumpsuit".to_string()],
            pixiv_tag: "NARUTO".to_string(),
            item_e: "456".to_string(),
            item_f: "ghibli style".to_string(),
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: CharacterRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
