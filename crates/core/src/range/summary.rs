//! Structured range summaries and their text rendering

use std::fmt;

use serde_json::Value;

use super::{categorize_codes, decode_entries, group_by_action_position, Categories};
use crate::models::RangeEntry;

/// Shown when there is nothing to summarize
pub const NO_RANGES: &str = "No ranges defined";

/// One action + position block of a summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub label: String,
    pub categories: Categories,
}

/// Display-ready view of a player's ranges
///
/// Holds only generated labels and hand codes, never free text, so
/// renderers can output it without escaping user input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub groups: Vec<GroupSummary>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return write!(f, "{}", NO_RANGES);
        }

        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", group.label)?;

            let c = &group.categories;
            if c.is_empty() {
                writeln!(f, "  No hands selected")?;
                continue;
            }
            for (title, hands) in [
                ("Pairs", &c.pairs),
                ("Suited", &c.suited),
                ("Offsuit", &c.offsuit),
            ] {
                if !hands.is_empty() {
                    writeln!(f, "  {}: {}", title, hands.join(", "))?;
                }
            }
        }
        Ok(())
    }
}

/// Group and categorize entries for display
pub fn summarize(entries: &[RangeEntry]) -> Summary {
    let groups = group_by_action_position(entries)
        .into_iter()
        .map(|group| GroupSummary {
            label: group.label(),
            categories: categorize_codes(&group.hands),
        })
        .collect();
    Summary { groups }
}

pub fn format_summary(entries: &[RangeEntry]) -> String {
    summarize(entries).to_string()
}

/// Format possibly corrupted persisted entries
pub fn format_summary_value(value: &Value) -> String {
    format_summary(&decode_entries(value))
}
