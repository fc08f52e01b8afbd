//! Itinerary document model for Wayfarer Studio.
//!
//! The whole trip lives in one [`Itinerary`] value: travelers, day-by-day
//! activities, stays, expenses and the pre-departure checklist. Edits never
//! mutate a document in place: every operation in [`edit`](mod@crate::edit)
//! takes `&self` and returns a replacement document, which the caller hands
//! to the document store for persistence.
//!
//! Derived views (expense totals, checklist progress, map waypoints) are
//! pure functions over the current document and live in [`derived`].

pub mod derived;
pub mod edit;
pub mod enums;
pub mod error;
pub mod ids;
pub mod itinerary;
pub mod seed;

pub use derived::{
    CategoryTotal, ChecklistProgress, DatedWaypoint, GeoPoint, Waypoint, all_waypoints,
    checklist_progress, day_waypoints, expense_totals, grand_total, trip_duration_days,
};
pub use edit::{ActivityPatch, ExpensePatch, StayPatch, TravelerDraft, TravelerPatch};
pub use enums::{ActivityTag, ExpenseCategory, VisaStatus};
pub use error::{ModelError, Result};
pub use ids::{IdSource, RandomIds, SequentialIds, TravelerRef};
pub use itinerary::{
    Activity, ChecklistItem, DayItinerary, Expense, Itinerary, Stay, Traveler, TripSummary,
};
pub use seed::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, seed_itinerary};
