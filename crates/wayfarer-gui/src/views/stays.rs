//! Stays view
//!
//! One card per lodging booking with full field editing and a delete
//! affordance. Occupants render as the stored name references, even when a
//! referenced traveler no longer exists.

use chrono::NaiveDate;
use egui::{DragValue, RichText, Ui};
use wayfarer_model::{Itinerary, RandomIds, Stay, StayPatch};

use crate::theme::{colors, spacing};

#[derive(Default)]
pub struct StaysView {
    ids: RandomIds,
}

impl StaysView {
    pub fn show(&mut self, ui: &mut Ui, doc: &Itinerary) -> Option<Itinerary> {
        let mut replacement = None;

        if doc.stays.is_empty() {
            ui.label(RichText::new("No stays booked yet.").weak());
        }

        for stay in &doc.stays {
            ui.add_space(spacing::SM);
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    let mut hotel_name = stay.hotel_name.clone();
                    if ui.text_edit_singleline(&mut hotel_name).changed() {
                        replacement = Some(doc.update_stay(&stay.id, &StayPatch {
                            hotel_name: Some(hotel_name),
                            ..Default::default()
                        }));
                    }
                    if ui
                        .button(RichText::new(egui_phosphor::regular::TRASH).color(colors::DANGER))
                        .clicked()
                    {
                        replacement = Some(doc.remove_stay(&stay.id));
                    }
                });

                ui.horizontal(|ui| {
                    ui.label(RichText::new("City").small().weak());
                    let mut city = stay.city.clone();
                    if ui.text_edit_singleline(&mut city).changed() {
                        replacement = Some(doc.update_stay(&stay.id, &StayPatch {
                            city: Some(city),
                            ..Default::default()
                        }));
                    }
                    ui.label(RichText::new("Room").small().weak());
                    let mut room_type = stay.room_type.clone();
                    if ui.text_edit_singleline(&mut room_type).changed() {
                        replacement = Some(doc.update_stay(&stay.id, &StayPatch {
                            room_type: Some(room_type),
                            ..Default::default()
                        }));
                    }
                });

                ui.horizontal(|ui| {
                    if let Some(check_in) = date_field(ui, "Check-in", stay.check_in, &stay.id) {
                        replacement = Some(doc.update_stay(&stay.id, &StayPatch {
                            check_in: Some(check_in),
                            ..Default::default()
                        }));
                    }
                    if let Some(check_out) = date_field(ui, "Check-out", stay.check_out, &stay.id) {
                        replacement = Some(doc.update_stay(&stay.id, &StayPatch {
                            check_out: Some(check_out),
                            ..Default::default()
                        }));
                    }

                    ui.label(RichText::new("Cost").small().weak());
                    let mut cost = stay.cost;
                    if ui
                        .add(DragValue::new(&mut cost).speed(10.0).prefix("$ "))
                        .changed()
                    {
                        replacement = Some(doc.update_stay(&stay.id, &StayPatch {
                            cost: Some(cost),
                            ..Default::default()
                        }));
                    }
                });

                occupants_line(ui, stay);

                let mut notes = stay.notes.clone();
                if ui.text_edit_singleline(&mut notes).changed() {
                    replacement = Some(doc.update_stay(&stay.id, &StayPatch {
                        notes: Some(notes),
                        ..Default::default()
                    }));
                }
            });
        }

        ui.add_space(spacing::MD);
        if ui.button("Add stay").clicked() {
            replacement = Some(doc.add_stay(&mut self.ids));
        }

        replacement
    }
}

fn occupants_line(ui: &mut Ui, stay: &Stay) {
    if stay.occupants.is_empty() {
        return;
    }
    let names: Vec<&str> = stay.occupants.iter().map(|r| r.as_str()).collect();
    ui.label(
        RichText::new(format!(
            "{} {}",
            egui_phosphor::regular::USERS,
            names.join(", ")
        ))
        .small()
        .weak(),
    );
}

/// Date edit as a YYYY-MM-DD text field, committed on focus loss. Partial
/// input is buffered while the field has focus; input that does not parse
/// is dropped and the stored date re-renders.
fn date_field(ui: &mut Ui, label: &str, current: NaiveDate, salt: &str) -> Option<NaiveDate> {
    ui.label(RichText::new(label).small().weak());

    let buffer_id = ui.make_persistent_id((salt, label));
    let mut text = ui
        .data_mut(|d| d.get_temp::<String>(buffer_id))
        .unwrap_or_else(|| current.format("%Y-%m-%d").to_string());

    let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(88.0));
    if response.has_focus() {
        ui.data_mut(|d| d.insert_temp(buffer_id, text.clone()));
    }
    if response.lost_focus() {
        ui.data_mut(|d| d.remove::<String>(buffer_id));
        match NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d") {
            Ok(date) if date != current => return Some(date),
            _ => {}
        }
    }
    None
}
