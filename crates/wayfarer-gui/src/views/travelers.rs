//! Travelers & visa view
//!
//! One card per traveler with a visa status selector (icon derived from
//! the status), the visa-required flag and a remove affordance, plus the
//! add-traveler dialog. Removing a traveler deliberately leaves stay and
//! expense references to the name in place.

use egui::{ComboBox, RichText, Ui};
use wayfarer_model::{
    Itinerary, ModelError, RandomIds, TravelerDraft, TravelerPatch, VisaStatus,
};

use crate::theme::{colors, spacing, visa_status_icon};

#[derive(Default)]
pub struct TravelersView {
    /// Add-dialog draft; `Some` while the dialog is open.
    draft: Option<TravelerDraft>,
    ids: RandomIds,
}

impl TravelersView {
    pub fn show(&mut self, ui: &mut Ui, doc: &Itinerary) -> Option<Itinerary> {
        let mut replacement = None;

        for traveler in &doc.travelers {
            ui.add_space(spacing::SM);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&traveler.name).strong());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("Group {}", traveler.group)).small().weak(),
                        );
                        if traveler.visa_required {
                            ui.label(
                                RichText::new("visa required").small().color(colors::DANGER),
                            );
                        }
                    });
                });

                // Status selector with derived icon
                let (icon, color) = visa_status_icon(traveler.visa_status);
                ui.label(RichText::new(icon).color(color));

                let mut status = traveler.visa_status;
                ComboBox::from_id_salt(&traveler.id)
                    .selected_text(status.as_str())
                    .show_ui(ui, |ui| {
                        for candidate in VisaStatus::all() {
                            ui.selectable_value(&mut status, *candidate, candidate.as_str());
                        }
                    });
                if status != traveler.visa_status {
                    replacement = Some(doc.update_traveler(&traveler.id, &TravelerPatch {
                        visa_status: Some(status),
                        ..Default::default()
                    }));
                }

                let mut required = traveler.visa_required;
                if ui.checkbox(&mut required, "requires visa").changed() {
                    replacement = Some(doc.update_traveler(&traveler.id, &TravelerPatch {
                        visa_required: Some(required),
                        ..Default::default()
                    }));
                }

                if ui
                    .button(RichText::new(egui_phosphor::regular::TRASH).color(colors::DANGER))
                    .clicked()
                {
                    replacement = Some(doc.remove_traveler(&traveler.id));
                }
            });
        }

        ui.add_space(spacing::MD);
        if self.draft.is_none()
            && ui
                .button(format!(
                    "{} Add traveler",
                    egui_phosphor::regular::USER_PLUS
                ))
                .clicked()
        {
            self.draft = Some(TravelerDraft::default());
        }

        if let Some(done) = self.show_add_dialog(ui, doc, &mut replacement) {
            if done {
                self.draft = None;
            }
        }

        replacement
    }

    /// Render the add dialog. Returns `Some(true)` when it should close.
    fn show_add_dialog(
        &mut self,
        ui: &Ui,
        doc: &Itinerary,
        replacement: &mut Option<Itinerary>,
    ) -> Option<bool> {
        let draft = self.draft.as_mut()?;
        let mut close = false;

        egui::Window::new("Add Traveler")
            .collapsible(false)
            .resizable(false)
            .show(ui.ctx(), |ui| {
                ui.label("Full name");
                ui.text_edit_singleline(&mut draft.name);

                ui.add_space(spacing::SM);
                ui.label("Group");
                ComboBox::from_id_salt("traveler_group")
                    .selected_text(draft.group.clone())
                    .show_ui(ui, |ui| {
                        for group in ["A", "B", "Local"] {
                            ui.selectable_value(&mut draft.group, group.to_string(), group);
                        }
                    });

                ui.add_space(spacing::SM);
                ui.label("Visa status");
                ComboBox::from_id_salt("traveler_status")
                    .selected_text(draft.visa_status.as_str())
                    .show_ui(ui, |ui| {
                        for status in VisaStatus::all() {
                            ui.selectable_value(&mut draft.visa_status, *status, status.as_str());
                        }
                    });
                ui.checkbox(&mut draft.visa_required, "requires visa");

                ui.add_space(spacing::MD);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                    if ui.button("Add").clicked() {
                        match doc.add_traveler(draft, &mut self.ids) {
                            Ok(updated) => {
                                *replacement = Some(updated);
                                close = true;
                            }
                            Err(ModelError::EmptyTravelerName) => {
                                // Keep the dialog open until a name is given.
                            }
                        }
                    }
                    if draft.name.trim().is_empty() {
                        ui.label(RichText::new("name is required").small().weak());
                    }
                });
            });

        Some(close)
    }
}
