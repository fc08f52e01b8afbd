//! Routes view
//!
//! Derives the selected day's waypoints and the cross-day location index
//! from the document and feeds them to the map backend as display input.
//! This view never produces a document replacement.

use egui::{RichText, Ui};
use wayfarer_model::{
    DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, Itinerary, Waypoint, all_waypoints, day_waypoints,
};

use crate::map_backend::{MapBackend, PlaceholderBackend};
use crate::theme::spacing;

pub struct MapView {
    selected_day: usize,
    backend: Box<dyn MapBackend>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            selected_day: 0,
            backend: Box::new(PlaceholderBackend),
        }
    }
}

impl MapView {
    /// Replace the rendering backend (e.g. when a tile widget finishes its
    /// asynchronous initialization).
    pub fn set_backend(&mut self, backend: Box<dyn MapBackend>) {
        self.backend = backend;
    }

    pub fn show(&mut self, ui: &mut Ui, doc: &Itinerary) -> Option<Itinerary> {
        // Day selector; a stale index falls back to the first day.
        if self.selected_day >= doc.days.len() {
            self.selected_day = 0;
        }
        ui.horizontal_wrapped(|ui| {
            for (idx, day) in doc.days.iter().enumerate() {
                let text = format!("Day {:02}  {}", idx + 1, day.date.format("%b %d"));
                if ui.selectable_label(self.selected_day == idx, text).clicked() {
                    self.selected_day = idx;
                }
            }
        });

        ui.add_space(spacing::MD);

        let waypoints: Vec<Waypoint> = doc
            .days
            .get(self.selected_day)
            .map(day_waypoints)
            .unwrap_or_default();
        let center = waypoints
            .first()
            .map(|w| w.position)
            .unwrap_or(DEFAULT_MAP_CENTER);

        if self.backend.ready() {
            self.backend.show(ui, center, DEFAULT_MAP_ZOOM, &waypoints);
        } else {
            ui.group(|ui| {
                ui.label(RichText::new("Map is not ready").strong());
                ui.label(
                    RichText::new("No tile backend is available; showing the route as a list.")
                        .small()
                        .weak(),
                );
            });
        }

        ui.add_space(spacing::SM);
        ui.label(RichText::new("Route order").strong());
        if waypoints.is_empty() {
            ui.label(RichText::new("No geotagged activities on this day.").weak());
        }
        for (idx, waypoint) in waypoints.iter().enumerate() {
            ui.label(format!(
                "{}. {}  {} — {} ({:.3}, {:.3})",
                idx + 1,
                waypoint.time,
                waypoint.title,
                waypoint.location,
                waypoint.position.lat,
                waypoint.position.lng,
            ));
        }

        ui.add_space(spacing::LG);
        ui.separator();
        ui.label(RichText::new("All locations").strong());
        for entry in all_waypoints(doc) {
            ui.label(
                RichText::new(format!(
                    "{}  {}  {}",
                    entry.date.format("%b %d"),
                    entry.waypoint.time,
                    entry.waypoint.title
                ))
                .small(),
            );
        }

        None
    }
}
