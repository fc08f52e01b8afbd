//! View components
//!
//! One view per itinerary slice. Each view renders from a shared
//! `&Itinerary` and returns `Some(replacement)` when the user committed an
//! edit; the shell hands the replacement to the document store. Local
//! concerns (selected day, filters, dialog drafts) stay on the view structs
//! and are never persisted.

mod calendar;
mod checklist;
mod expenses;
mod map;
mod stays;
mod summary;
mod travelers;

pub use calendar::CalendarView;
pub use checklist::{ChecklistFilter, ChecklistView};
pub use expenses::ExpensesView;
pub use map::MapView;
pub use stays::StaysView;
pub use summary::SummaryView;
pub use travelers::TravelersView;
