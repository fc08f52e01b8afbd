//! Main application struct and eframe::App implementation

use std::path::PathBuf;

use directories::ProjectDirs;
use egui::RichText;
use wayfarer_store::{DocumentStore, FileStorage};

use crate::state::{AppState, Section};
use crate::theme::spacing;
use crate::views::{
    CalendarView, ChecklistView, ExpensesView, MapView, StaysView, SummaryView, TravelersView,
};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "wayfarer-studio";
const APP_NAME: &str = "Wayfarer Studio";
const SNAPSHOT_FILENAME: &str = "itinerary.json";

/// Path of the persisted itinerary snapshot.
///
/// Falls back to the working directory when the platform-specific data
/// directory cannot be determined.
fn snapshot_path() -> PathBuf {
    match ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME) {
        Some(dirs) => dirs.data_dir().join(SNAPSHOT_FILENAME),
        None => {
            tracing::warn!("could not determine data directory, saving next to the executable");
            PathBuf::from(SNAPSHOT_FILENAME)
        }
    }
}

/// Main application struct
pub struct WayfarerApp {
    store: DocumentStore<FileStorage>,
    state: AppState,
    summary: SummaryView,
    calendar: CalendarView,
    map: MapView,
    travelers: TravelersView,
    stays: StaysView,
    expenses: ExpensesView,
    checklist: ChecklistView,
}

impl WayfarerApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let path = snapshot_path();
        tracing::info!("itinerary snapshot at {}", path.display());

        Self {
            store: DocumentStore::open(FileStorage::new(path)),
            state: AppState::default(),
            summary: SummaryView,
            calendar: CalendarView::default(),
            map: MapView::default(),
            travelers: TravelersView::default(),
            stays: StaysView::default(),
            expenses: ExpensesView::default(),
            checklist: ChecklistView::default(),
        }
    }

    fn show_sidebar(&mut self, ctx: &egui::Context) {
        let width = if self.state.sidebar_expanded { 180.0 } else { 56.0 };
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(width)
            .show(ctx, |ui| {
                ui.add_space(spacing::MD);
                if self.state.sidebar_expanded {
                    ui.label(RichText::new("Wayfarer Studio").strong());
                    ui.add_space(spacing::MD);
                }

                for section in Section::all() {
                    let selected = self.state.section == *section;
                    let text = if self.state.sidebar_expanded {
                        format!("{}  {}", section.icon(), section.label())
                    } else {
                        section.icon().to_string()
                    };
                    if ui.selectable_label(selected, text).clicked() {
                        self.state.section = *section;
                    }
                }

                ui.add_space(spacing::LG);
                ui.separator();
                let toggle_icon = if self.state.sidebar_expanded {
                    egui_phosphor::regular::CARET_LEFT
                } else {
                    egui_phosphor::regular::CARET_RIGHT
                };
                if ui.button(toggle_icon).clicked() {
                    self.state.sidebar_expanded = !self.state.sidebar_expanded;
                }
            });
    }
}

impl eframe::App for WayfarerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_sidebar(ctx);

        // The active view reads the current document and may hand back a
        // replacement; the store persists it and every later read observes
        // the new value. Views never mutate the document they were given.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new(self.state.section.label()).size(26.0));
            ui.add_space(spacing::MD);

            let replacement = match self.state.section {
                Section::Summary => self.summary.show(ui, self.store.document()),
                Section::Itinerary => self.calendar.show(ui, self.store.document()),
                Section::Routes => self.map.show(ui, self.store.document()),
                Section::Travelers => self.travelers.show(ui, self.store.document()),
                Section::Stays => self.stays.show(ui, self.store.document()),
                Section::Finance => self.expenses.show(ui, self.store.document()),
                Section::Checklist => self.checklist.show(ui, self.store.document()),
            };

            if let Some(document) = replacement {
                self.store.update(document);
            }
        });
    }
}
