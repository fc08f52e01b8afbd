//! Tests for derived-view computations.

use wayfarer_model::{
    ChecklistProgress, ExpenseCategory, ExpensePatch, SequentialIds, all_waypoints,
    checklist_progress, day_waypoints, expense_totals, grand_total, seed_itinerary,
};

#[test]
fn category_totals_keep_first_seen_order() {
    let doc = seed_itinerary();
    let totals = expense_totals(&doc.expenses);

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].category, ExpenseCategory::Flight);
    assert_eq!(totals[0].total, 800.0);
    assert_eq!(totals[1].category, ExpenseCategory::Hotel);
    assert_eq!(totals[1].total, 400.0);
}

#[test]
fn category_totals_sum_to_grand_total() {
    let doc = seed_itinerary();
    let totals = expense_totals(&doc.expenses);
    let sum: f64 = totals.iter().map(|t| t.total).sum();
    assert_eq!(sum, grand_total(&doc.expenses));
    assert_eq!(grand_total(&doc.expenses), 1200.0);
}

#[test]
fn adding_food_expense_raises_totals() {
    let doc = seed_itinerary();
    let mut ids = SequentialIds::new("e");

    // New expenses default to the Food category; price it at 150.
    let with_expense = doc.add_expense(&mut ids);
    let new_id = with_expense.expenses.last().expect("new expense").id.clone();
    let priced = with_expense.update_expense(
        &new_id,
        &ExpensePatch {
            amount: Some(150.0),
            ..Default::default()
        },
    );

    let totals = expense_totals(&priced.expenses);
    let food = totals
        .iter()
        .find(|t| t.category == ExpenseCategory::Food)
        .expect("food total");
    assert_eq!(food.total, 150.0);
    assert_eq!(grand_total(&priced.expenses), 1350.0);
}

#[test]
fn checklist_progress_tracks_toggles() {
    let doc = seed_itinerary();
    assert_eq!(checklist_progress(&doc.checklist).percent(), 50);

    let toggled = doc.toggle_checklist_item("c2");
    let progress = checklist_progress(&toggled.checklist);
    assert_eq!(progress.completed, 3);
    assert_eq!(progress.total, 4);
    assert_eq!(progress.percent(), 75);

    let back = toggled.toggle_checklist_item("c2");
    assert_eq!(checklist_progress(&back.checklist).percent(), 50);
}

#[test]
fn empty_checklist_reports_zero_percent() {
    let progress = checklist_progress(&[]);
    assert_eq!(progress.percent(), 0);
    assert_eq!(progress, ChecklistProgress {
        completed: 0,
        total: 0
    });
}

#[test]
fn waypoints_require_both_coordinates() {
    let doc = seed_itinerary();
    let mut day = doc.day("d1").expect("day d1").clone();
    day.activities[0].lat = None;
    day.activities[1].lng = None;

    let waypoints = day_waypoints(&day);
    let ids: Vec<&str> = waypoints.iter().map(|w| w.activity_id.as_str()).collect();
    assert_eq!(ids, ["a3", "a4"]);
    assert_eq!(waypoints[0].title, "Arrival in Tbilisi");
    assert_eq!(waypoints[0].position.lat, 41.669);
}

#[test]
fn all_waypoints_flatten_in_day_order() {
    let doc = seed_itinerary();
    let all = all_waypoints(&doc);

    // Every seed activity carries coordinates.
    assert_eq!(all.len(), 10);
    assert_eq!(all[0].waypoint.activity_id, "a1");
    assert_eq!(all[0].date, doc.days[0].date);
    assert_eq!(all[9].waypoint.activity_id, "a10");
    assert_eq!(all[9].date, doc.days[2].date);

    // Idempotent: same document, same derived list.
    assert_eq!(all_waypoints(&doc), all);
}
