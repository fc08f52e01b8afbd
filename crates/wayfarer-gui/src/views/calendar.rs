//! Itinerary calendar view
//!
//! Day picker plus the per-day activity feed. Time, title and location are
//! edited in place; committing a time edit re-sorts the owning day, which
//! the next frame renders in the new order.

use chrono::Duration;
use egui::{RichText, Ui};
use wayfarer_model::{ActivityPatch, DayItinerary, Itinerary, RandomIds};

use crate::theme::{colors, spacing, tag_color};

#[derive(Default)]
pub struct CalendarView {
    /// Selected day id; falls back to the first day when stale or unset.
    selected_day_id: Option<String>,
    ids: RandomIds,
}

impl CalendarView {
    pub fn show(&mut self, ui: &mut Ui, doc: &Itinerary) -> Option<Itinerary> {
        let mut replacement = None;

        let active_day = self.active_day(doc);
        let Some(active_day) = active_day.cloned() else {
            ui.label(RichText::new("No days planned yet.").weak());
            if ui.button("Add first day").clicked() {
                replacement = Some(doc.add_day(doc.start_date, &mut self.ids));
            }
            return replacement;
        };

        // Day picker
        ui.horizontal_wrapped(|ui| {
            for (idx, day) in doc.days.iter().enumerate() {
                let selected = day.id == active_day.id;
                let text = format!("Day {:02}  {}", idx + 1, day.date.format("%b %d"));
                if ui.selectable_label(selected, text).clicked() {
                    self.selected_day_id = Some(day.id.clone());
                }
            }
            if ui.button(egui_phosphor::regular::PLUS).clicked() {
                let next_date = doc
                    .days
                    .last()
                    .map(|d| d.date + Duration::days(1))
                    .unwrap_or(doc.start_date);
                replacement = Some(doc.add_day(next_date, &mut self.ids));
            }
        });

        ui.add_space(spacing::MD);
        ui.separator();

        for activity in &active_day.activities {
            ui.add_space(spacing::SM);
            ui.horizontal(|ui| {
                // Time column; every committed change re-sorts the day.
                let mut time = activity.time.clone();
                let time_edit = egui::TextEdit::singleline(&mut time)
                    .desired_width(48.0)
                    .font(egui::TextStyle::Monospace);
                if ui.add(time_edit).changed() {
                    replacement = Some(doc.update_activity(&active_day.id, &activity.id, &ActivityPatch {
                        time: Some(time),
                        ..Default::default()
                    }));
                }

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(activity.tag.as_str())
                                .small()
                                .color(tag_color(activity.tag)),
                        );
                        if !activity.has_position() {
                            ui.label(RichText::new("no geodata").small().weak());
                        }
                    });

                    let mut title = activity.title.clone();
                    if ui.text_edit_singleline(&mut title).changed() {
                        replacement = Some(doc.update_activity(&active_day.id, &activity.id, &ActivityPatch {
                            title: Some(title),
                            ..Default::default()
                        }));
                    }

                    ui.horizontal(|ui| {
                        ui.label(RichText::new(egui_phosphor::regular::MAP_PIN).weak());
                        let mut location = activity.location.clone();
                        if ui.text_edit_singleline(&mut location).changed() {
                            replacement = Some(doc.update_activity(
                                &active_day.id,
                                &activity.id,
                                &ActivityPatch {
                                    location: Some(location),
                                    ..Default::default()
                                },
                            ));
                        }
                    });

                    if !activity.notes.is_empty() {
                        ui.label(RichText::new(&activity.notes).small().weak());
                    }
                });

                if ui
                    .button(RichText::new(egui_phosphor::regular::TRASH).color(colors::DANGER))
                    .clicked()
                {
                    replacement = Some(doc.remove_activity(&active_day.id, &activity.id));
                }
            });
        }

        ui.add_space(spacing::MD);
        if ui.button("Add activity").clicked() {
            replacement = Some(doc.add_activity(&active_day.id, &mut self.ids));
        }

        replacement
    }

    fn active_day<'a>(&self, doc: &'a Itinerary) -> Option<&'a DayItinerary> {
        self.selected_day_id
            .as_deref()
            .and_then(|id| doc.day(id))
            .or_else(|| doc.days.first())
    }
}
