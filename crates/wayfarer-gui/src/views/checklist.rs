//! Checklist view
//!
//! Progress card, display filter and per-item editing. The filter is
//! presentation-only: it narrows what is shown, never what is stored.

use egui::{ProgressBar, RichText, Ui};
use wayfarer_model::{ChecklistItem, Itinerary, RandomIds, checklist_progress};

use crate::theme::{colors, spacing};

/// Display filter over checklist items. Never persisted and never affects
/// list order or membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChecklistFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl ChecklistFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    pub fn all() -> &'static [ChecklistFilter] {
        &[Self::All, Self::Pending, Self::Completed]
    }

    pub fn matches(&self, item: &ChecklistItem) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !item.is_completed,
            Self::Completed => item.is_completed,
        }
    }

    /// The displayed subset, in stored order.
    pub fn apply<'a>(&self, items: &'a [ChecklistItem]) -> Vec<&'a ChecklistItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

#[derive(Default)]
pub struct ChecklistView {
    filter: ChecklistFilter,
    draft_task: String,
    ids: RandomIds,
}

impl ChecklistView {
    pub fn show(&mut self, ui: &mut Ui, doc: &Itinerary) -> Option<Itinerary> {
        let mut replacement = None;

        // Progress card
        let progress = checklist_progress(&doc.checklist);
        ui.label(RichText::new(format!("{}%", progress.percent())).size(28.0).strong());
        ui.add(ProgressBar::new(progress.percent() as f32 / 100.0).desired_height(6.0));
        ui.label(
            RichText::new(format!(
                "{} / {} completed",
                progress.completed, progress.total
            ))
            .small()
            .weak(),
        );

        ui.add_space(spacing::MD);

        // Display filter
        ui.horizontal(|ui| {
            for filter in ChecklistFilter::all() {
                if ui
                    .selectable_label(self.filter == *filter, filter.label())
                    .clicked()
                {
                    self.filter = *filter;
                }
            }
        });

        ui.add_space(spacing::SM);
        ui.separator();

        for item in self.filter.apply(&doc.checklist) {
            ui.horizontal(|ui| {
                let icon = if item.is_completed {
                    egui_phosphor::regular::CHECK_SQUARE
                } else {
                    egui_phosphor::regular::SQUARE
                };
                if ui.button(icon).clicked() {
                    replacement = Some(doc.toggle_checklist_item(&item.id));
                }

                let mut task = item.task.clone();
                if ui.text_edit_singleline(&mut task).changed() {
                    replacement = Some(doc.update_checklist_task(&item.id, &task));
                }
                ui.label(RichText::new(&item.category).small().weak());

                if ui
                    .button(RichText::new(egui_phosphor::regular::TRASH).color(colors::DANGER))
                    .clicked()
                {
                    replacement = Some(doc.remove_checklist_item(&item.id));
                }
            });
        }

        ui.add_space(spacing::MD);
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.draft_task);
            if ui.button("Add task").clicked() && !self.draft_task.trim().is_empty() {
                replacement =
                    Some(doc.add_checklist_item(self.draft_task.trim(), "General", &mut self.ids));
                self.draft_task.clear();
            }
        });

        replacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_model::seed_itinerary;

    #[test]
    fn filters_only_narrow_the_displayed_subset() {
        let doc = seed_itinerary();

        let all = ChecklistFilter::All.apply(&doc.checklist);
        let pending = ChecklistFilter::Pending.apply(&doc.checklist);
        let completed = ChecklistFilter::Completed.apply(&doc.checklist);

        assert_eq!(all.len(), doc.checklist.len());
        assert_eq!(pending.len() + completed.len(), doc.checklist.len());
        assert!(pending.iter().all(|i| !i.is_completed));
        assert!(completed.iter().all(|i| i.is_completed));

        // Filtering never reorders: the shown subset preserves stored order.
        let shown_ids: Vec<&str> = pending.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(shown_ids, ["c2", "c3"]);
    }

    #[test]
    fn applying_a_filter_leaves_the_document_untouched() {
        let doc = seed_itinerary();
        let before = doc.checklist.clone();
        let _ = ChecklistFilter::Completed.apply(&doc.checklist);
        assert_eq!(doc.checklist, before);
    }
}
