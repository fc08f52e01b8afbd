//! The itinerary document and its embedded entities.
//!
//! Field names serialize in camelCase so the JSON snapshot keeps the shape
//! the application has always persisted (`startDate`, `isCompleted`,
//! `splitBetween`, …). There is no versioning scheme: a stored snapshot
//! either deserializes into these types or is discarded for the seed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{ActivityTag, ExpenseCategory, VisaStatus};
use crate::ids::TravelerRef;

/// The single root document holding all trip state.
///
/// Exactly one `Itinerary` exists per session. It is owned by the document
/// store and replaced, never mutated in place, on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub summary: TripSummary,
    pub travelers: Vec<Traveler>,
    pub days: Vec<DayItinerary>,
    pub stays: Vec<Stay>,
    pub expenses: Vec<Expense>,
    pub checklist: Vec<ChecklistItem>,
}

impl Itinerary {
    pub fn day(&self, day_id: &str) -> Option<&DayItinerary> {
        self.days.iter().find(|d| d.id == day_id)
    }

    pub fn traveler(&self, traveler_id: &str) -> Option<&Traveler> {
        self.travelers.iter().find(|t| t.id == traveler_id)
    }
}

/// Trip-level summary block shown on the overview screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    /// Ordered list of trip highlights.
    pub highlights: Vec<String>,
    pub emergency_contact: String,
    pub arrival_cities: Vec<String>,
    pub departure_city: String,
}

/// One member of the traveling party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traveler {
    pub id: String,
    /// Display name; also the join key used by [`TravelerRef`] references.
    pub name: String,
    pub group: String,
    pub visa_status: VisaStatus,
    pub visa_required: bool,
}

/// One calendar day with its ordered activities.
///
/// Days are kept in chronological order by the caller; activities within a
/// day are re-sorted by time whenever a time is edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayItinerary {
    pub id: String,
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

/// A scheduled activity within one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    /// Fixed-width zero-padded "HH:MM"; lexicographic order is time order.
    pub time: String,
    pub title: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub notes: String,
    pub tag: ActivityTag,
}

impl Activity {
    /// True when the activity carries both coordinates and can appear on
    /// the map. Activities without geodata are simply absent from map
    /// views, never an error.
    pub fn has_position(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }
}

/// A lodging booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub id: String,
    pub city: String,
    pub hotel_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub occupants: Vec<TravelerRef>,
    pub cost: f64,
    pub notes: String,
}

/// One expense line item.
///
/// `paid_by` and `split_between` reference travelers by name with no
/// integrity enforcement; a dangling reference renders as free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub category: ExpenseCategory,
    pub description: String,
    pub paid_by: TravelerRef,
    pub amount: f64,
    pub currency: String,
    pub split_between: Vec<TravelerRef>,
}

/// One pre-departure checklist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub task: String,
    pub is_completed: bool,
    pub category: String,
}
