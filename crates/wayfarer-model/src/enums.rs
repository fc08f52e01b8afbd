//! Closed enumerations for itinerary fields.
//!
//! The stored snapshot represents these as plain strings ("In Progress",
//! "Sightseeing", …). Modeling them as enums forces exhaustive matching at
//! every consumption site (icon selection, tag styling, category grouping)
//! so a new variant cannot be silently mishandled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a scheduled activity within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityTag {
    Travel,
    Hotel,
    Sightseeing,
    Food,
}

impl ActivityTag {
    /// Canonical name as stored in the snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityTag::Travel => "Travel",
            ActivityTag::Hotel => "Hotel",
            ActivityTag::Sightseeing => "Sightseeing",
            ActivityTag::Food => "Food",
        }
    }

    /// All tags in display order.
    pub fn all() -> &'static [ActivityTag] {
        &[
            ActivityTag::Travel,
            ActivityTag::Hotel,
            ActivityTag::Sightseeing,
            ActivityTag::Food,
        ]
    }
}

impl fmt::Display for ActivityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visa processing state for one traveler.
///
/// The status icon shown in the travelers view is derived from this value,
/// never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisaStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "Not Required")]
    NotRequired,
}

impl VisaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisaStatus::Pending => "Pending",
            VisaStatus::InProgress => "In Progress",
            VisaStatus::Completed => "Completed",
            VisaStatus::NotRequired => "Not Required",
        }
    }

    pub fn all() -> &'static [VisaStatus] {
        &[
            VisaStatus::Pending,
            VisaStatus::InProgress,
            VisaStatus::Completed,
            VisaStatus::NotRequired,
        ]
    }
}

impl fmt::Display for VisaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spending category for one expense line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Flight,
    Hotel,
    Transport,
    Food,
    Sightseeing,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Flight => "Flight",
            ExpenseCategory::Hotel => "Hotel",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Sightseeing => "Sightseeing",
        }
    }

    pub fn all() -> &'static [ExpenseCategory] {
        &[
            ExpenseCategory::Flight,
            ExpenseCategory::Hotel,
            ExpenseCategory::Transport,
            ExpenseCategory::Food,
            ExpenseCategory::Sightseeing,
        ]
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_variants_keep_snapshot_spelling() {
        let json = serde_json::to_string(&VisaStatus::InProgress).expect("serialize status");
        assert_eq!(json, "\"In Progress\"");
        let parsed: VisaStatus =
            serde_json::from_str("\"Not Required\"").expect("deserialize status");
        assert_eq!(parsed, VisaStatus::NotRequired);
    }
}
