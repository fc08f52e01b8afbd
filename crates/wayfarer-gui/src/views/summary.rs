//! Trip summary view
//!
//! Pure read view over aggregate counts and the trip-level summary block.
//! Never produces a document replacement.

use egui::{RichText, Ui};
use wayfarer_model::{Itinerary, trip_duration_days};

use crate::theme::spacing;

pub struct SummaryView;

impl SummaryView {
    pub fn show(&mut self, ui: &mut Ui, doc: &Itinerary) -> Option<Itinerary> {
        ui.label(RichText::new(&doc.destination).size(22.0).strong());
        ui.label(
            RichText::new(format!(
                "{} – {}",
                doc.start_date.format("%b %d"),
                doc.end_date.format("%b %d, %Y")
            ))
            .weak(),
        );

        ui.add_space(spacing::MD);
        ui.horizontal(|ui| {
            stat(ui, "Travelers", &format!("{} PAX", doc.travelers.len()));
            ui.separator();
            stat(ui, "Duration", &format!("{} days", trip_duration_days(doc)));
            ui.separator();
            stat(ui, "Days planned", &doc.days.len().to_string());
        });

        ui.add_space(spacing::LG);
        ui.separator();
        ui.add_space(spacing::SM);

        ui.label(RichText::new("Highlights").strong());
        ui.add_space(spacing::XS);
        for highlight in &doc.summary.highlights {
            ui.label(format!("{} {highlight}", egui_phosphor::regular::STAR));
        }

        ui.add_space(spacing::MD);
        ui.label(RichText::new("Logistics").strong());
        ui.add_space(spacing::XS);
        ui.label(format!(
            "Arrivals from: {}",
            doc.summary.arrival_cities.join(", ")
        ));
        ui.label(format!("Departure city: {}", doc.summary.departure_city));
        ui.label(format!(
            "{} {}",
            egui_phosphor::regular::PHONE,
            doc.summary.emergency_contact
        ));

        None
    }
}

fn stat(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).strong());
    });
}
