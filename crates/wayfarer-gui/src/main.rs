//! Wayfarer Studio - Desktop trip planner
//!
//! A single-user desktop application for maintaining a structured trip
//! itinerary: days and activities, travelers and visa status, stays,
//! expenses and the pre-departure checklist.

use eframe::egui;
use wayfarer_gui::app::WayfarerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wayfarer Studio")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1024.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wayfarer Studio",
        options,
        Box::new(|cc| Ok(Box::new(WayfarerApp::new(cc)))),
    )
}
