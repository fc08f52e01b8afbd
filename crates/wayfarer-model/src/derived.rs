//! Derived-view computations.
//!
//! Stateless pure functions over the current document, recomputed on every
//! render. Document size is small and edits are infrequent, so nothing here
//! caches.

use chrono::NaiveDate;

use crate::enums::ExpenseCategory;
use crate::itinerary::{DayItinerary, Expense, Itinerary};

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// An activity with valid coordinates, ready for map display.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub activity_id: String,
    pub position: GeoPoint,
    pub title: String,
    pub time: String,
    pub location: String,
}

/// A waypoint tagged with its parent day's date, for the cross-day index.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedWaypoint {
    pub date: NaiveDate,
    pub waypoint: Waypoint,
}

/// Sum of expense amounts for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

/// Checklist completion counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
}

impl ChecklistProgress {
    /// Completion percentage, rounded. An empty checklist reports 0 rather
    /// than dividing by zero.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (100.0 * self.completed as f64 / self.total as f64).round() as u8
    }
}

/// Per-category expense sums, in first-seen category order.
pub fn expense_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category,
                total: expense.amount,
            }),
        }
    }
    totals
}

/// Sum of all expense amounts.
pub fn grand_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Completion counts for the checklist.
pub fn checklist_progress(items: &[crate::itinerary::ChecklistItem]) -> ChecklistProgress {
    ChecklistProgress {
        completed: items.iter().filter(|i| i.is_completed).count(),
        total: items.len(),
    }
}

/// The day's activities that carry both coordinates, in activity order.
pub fn day_waypoints(day: &DayItinerary) -> Vec<Waypoint> {
    day.activities
        .iter()
        .filter_map(|activity| {
            let (lat, lng) = (activity.lat?, activity.lng?);
            Some(Waypoint {
                activity_id: activity.id.clone(),
                position: GeoPoint { lat, lng },
                title: activity.title.clone(),
                time: activity.time.clone(),
                location: activity.location.clone(),
            })
        })
        .collect()
}

/// All geotagged activities across the trip, flattened in day/activity
/// order and tagged with the owning day's date.
pub fn all_waypoints(itinerary: &Itinerary) -> Vec<DatedWaypoint> {
    itinerary
        .days
        .iter()
        .flat_map(|day| {
            day_waypoints(day).into_iter().map(|waypoint| DatedWaypoint {
                date: day.date,
                waypoint,
            })
        })
        .collect()
}

/// Inclusive day span of the trip, for the summary header.
pub fn trip_duration_days(itinerary: &Itinerary) -> i64 {
    (itinerary.end_date - itinerary.start_date).num_days() + 1
}
