//! Row filtering.

use roster_model::{Gender, Roster};

/// Applies the substring filter, then the gender filter, returning retained
/// row indices in table order.
///
/// The fixed substring-then-gender order is part of the selection contract.
/// Rows without a usable rule value never match a non-blank substring
/// filter; a roster without a gender column leaves the gender filter a
/// no-op.
pub fn filter_rows(roster: &Roster, filter: &str, gender: Gender) -> Vec<usize> {
    let mut retained: Vec<usize> = (0..roster.table.row_count()).collect();

    let needle = filter.trim().to_lowercase();
    if !needle.is_empty() {
        let rule_column = roster.schema.tags_rule.as_deref();
        retained.retain(|&index| {
            let Some(column) = rule_column else {
                return false;
            };
            roster
                .row(index)
                .and_then(|row| row.value(column))
                .map(|value| value.to_lowercase().contains(&needle))
                .unwrap_or(false)
        });
    }

    if gender != Gender::Any
        && let Some(column) = roster.schema.gender.as_deref()
    {
        retained.retain(|&index| {
            roster
                .row(index)
                .and_then(|row| row.value(column))
                .map(|value| value.eq_ignore_ascii_case(gender.as_str()))
                .unwrap_or(false)
        });
    }

    retained
}
