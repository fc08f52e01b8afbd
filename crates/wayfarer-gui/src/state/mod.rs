//! Application state management
//!
//! Runtime shell state only: the active section and sidebar layout. None of
//! this is part of the itinerary document and none of it is persisted.

mod app_state;

pub use app_state::{AppState, Section};
