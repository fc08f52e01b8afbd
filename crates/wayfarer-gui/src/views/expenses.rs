//! Finance view
//!
//! Grand-total card, the per-category allocation chart and the editable
//! expense table. Aggregates are recomputed from the document every frame;
//! the chart is purely presentational and never feeds back into the
//! document.

use egui::{ComboBox, DragValue, ProgressBar, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use wayfarer_model::{
    Expense, ExpenseCategory, ExpensePatch, Itinerary, RandomIds, TravelerRef, expense_totals,
    grand_total,
};

use crate::theme::{colors, spacing};

#[derive(Default)]
pub struct ExpensesView {
    ids: RandomIds,
}

impl ExpensesView {
    pub fn show(&mut self, ui: &mut Ui, doc: &Itinerary) -> Option<Itinerary> {
        let mut replacement = None;

        let total = grand_total(&doc.expenses);
        ui.label(RichText::new("Global budget").small().weak());
        ui.label(RichText::new(format!("$ {total:.2}")).size(28.0).strong());

        ui.add_space(spacing::MD);
        allocation_chart(ui, doc);

        ui.add_space(spacing::LG);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Line items").strong());
            if ui.button("New entry").clicked() {
                replacement = Some(doc.add_expense(&mut self.ids));
            }
        });
        ui.add_space(spacing::SM);

        let row_height = 24.0;
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(110.0)) // Category
            .column(Column::remainder().at_least(140.0)) // Description
            .column(Column::exact(150.0)) // Paid by
            .column(Column::exact(90.0)) // Amount
            .column(Column::exact(40.0)) // Actions
            .header(row_height, |mut header| {
                for title in ["Category", "Description", "Paid by", "Amount", ""] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).small().strong());
                    });
                }
            })
            .body(|mut body| {
                for expense in &doc.expenses {
                    body.row(row_height, |mut row| {
                        row.col(|ui| {
                            if let Some(category) = category_selector(ui, expense) {
                                replacement = Some(doc.update_expense(&expense.id, &ExpensePatch {
                                    category: Some(category),
                                    ..Default::default()
                                }));
                            }
                        });
                        row.col(|ui| {
                            let mut description = expense.description.clone();
                            if ui.text_edit_singleline(&mut description).changed() {
                                replacement = Some(doc.update_expense(&expense.id, &ExpensePatch {
                                    description: Some(description),
                                    ..Default::default()
                                }));
                            }
                        });
                        row.col(|ui| {
                            if let Some(paid_by) = payer_selector(ui, doc, expense) {
                                replacement = Some(doc.update_expense(&expense.id, &ExpensePatch {
                                    paid_by: Some(paid_by),
                                    ..Default::default()
                                }));
                            }
                        });
                        row.col(|ui| {
                            let mut amount = expense.amount;
                            let drag = DragValue::new(&mut amount)
                                .speed(1.0)
                                .range(0.0..=f64::MAX)
                                .prefix("$ ");
                            if ui.add(drag).changed() {
                                replacement = Some(doc.update_expense(&expense.id, &ExpensePatch {
                                    amount: Some(amount),
                                    ..Default::default()
                                }));
                            }
                        });
                        row.col(|ui| {
                            let trash =
                                RichText::new(egui_phosphor::regular::TRASH).color(colors::DANGER);
                            if ui.button(trash).clicked() {
                                replacement = Some(doc.remove_expense(&expense.id));
                            }
                        });
                    });
                }
            });

        replacement
    }
}

/// Per-category allocation bars in first-seen category order.
fn allocation_chart(ui: &mut Ui, doc: &Itinerary) {
    let totals = expense_totals(&doc.expenses);
    if totals.is_empty() {
        ui.label(RichText::new("No expenses recorded yet.").weak());
        return;
    }
    let grand = grand_total(&doc.expenses);
    for entry in totals {
        let fraction = if grand > 0.0 {
            (entry.total / grand) as f32
        } else {
            0.0
        };
        ui.horizontal(|ui| {
            ui.add_sized(
                [90.0, 16.0],
                egui::Label::new(RichText::new(entry.category.as_str()).small()),
            );
            ui.add(
                ProgressBar::new(fraction)
                    .desired_height(10.0)
                    .text(RichText::new(format!("$ {:.2}", entry.total)).small()),
            );
        });
    }
}

fn category_selector(ui: &mut Ui, expense: &Expense) -> Option<ExpenseCategory> {
    let mut category = expense.category;
    ComboBox::from_id_salt(("category", &expense.id))
        .selected_text(category.as_str())
        .show_ui(ui, |ui| {
            for candidate in ExpenseCategory::all() {
                ui.selectable_value(&mut category, *candidate, candidate.as_str());
            }
        });
    (category != expense.category).then_some(category)
}

/// Payer combo over the current travelers. A payer naming a removed
/// traveler still renders as stored; no integrity check is applied.
fn payer_selector(ui: &mut Ui, doc: &Itinerary, expense: &Expense) -> Option<TravelerRef> {
    let mut paid_by = expense.paid_by.clone();
    ComboBox::from_id_salt(("paid_by", &expense.id))
        .selected_text(paid_by.as_str().to_string())
        .show_ui(ui, |ui| {
            for traveler in &doc.travelers {
                ui.selectable_value(
                    &mut paid_by,
                    TravelerRef::new(traveler.name.clone()),
                    &traveler.name,
                );
            }
        });
    (paid_by != expense.paid_by).then_some(paid_by)
}
