//! Pick request parameters supplied by the host.

use serde::{Deserialize, Serialize};

/// Gender filter applied during row selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Any,
    Girl,
    Boy,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Girl => "girl",
            Self::Boy => "boy",
        }
    }
}

/// One selection request: seed, filters, and requested outfit count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickRequest {
    /// Seed for the per-call random generator; equal seeds against an
    /// unchanged roster give equal outputs.
    pub seed: u64,
    /// Gender filter; `Any` disables it.
    pub gender: Gender,
    /// Number of outfit values to emit.
    pub quantity: usize,
    /// Case-insensitive substring filter over the rule column; blank
    /// disables it.
    pub filter: String,
}

impl Default for PickRequest {
    fn default() -> Self {
        Self {
            seed: 0,
            gender: Gender::Any,
            quantity: 1,
            filter: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_matches_host_defaults() {
        let request = PickRequest::default();
        assert_eq!(request.seed, 0);
        assert_eq!(request.gender, Gender::Any);
        assert_eq!(request.quantity, 1);
        assert!(request.filter.is_empty());
    }

    #[test]
    fn gender_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Gender::Girl).expect("serialize"),
            "\"girl\""
        );
        assert_eq!(Gender::Boy.as_str(), "boy");
    }
}
