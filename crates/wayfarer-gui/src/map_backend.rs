//! Boundary to the external mapping widget.
//!
//! The document model only ever feeds the widget display input: a center
//! point, a zoom default and the ordered waypoint list for the selected
//! day. Nothing flows back into the document. Backend initialization is
//! asynchronous from the application's point of view and may fail silently;
//! a backend that never becomes ready leaves the routes view in its
//! "not ready" state indefinitely, with no retry.

use egui::Ui;
use wayfarer_model::{GeoPoint, Waypoint};

/// A map rendering backend consuming derived waypoint lists.
pub trait MapBackend {
    /// Whether the backing widget finished initializing.
    fn ready(&self) -> bool;

    /// Draw markers (numbered in list order) and the day route.
    fn show(&mut self, ui: &mut Ui, center: GeoPoint, zoom: f64, waypoints: &[Waypoint]);
}

/// Stand-in used when no tile-rendering widget is wired up. Never becomes
/// ready; the routes view degrades to its textual route index.
#[derive(Debug, Default)]
pub struct PlaceholderBackend;

impl MapBackend for PlaceholderBackend {
    fn ready(&self) -> bool {
        false
    }

    fn show(&mut self, _ui: &mut Ui, _center: GeoPoint, _zoom: f64, _waypoints: &[Waypoint]) {}
}
