//! Tests for document-replacing edit operations.

use wayfarer_model::{
    ActivityPatch, ExpensePatch, ModelError, SequentialIds, StayPatch, TravelerDraft,
    TravelerPatch, VisaStatus, seed_itinerary,
};

#[test]
fn time_edit_resorts_owning_day() {
    let doc = seed_itinerary();
    let patch = ActivityPatch {
        time: Some("23:30".to_string()),
        ..Default::default()
    };
    let edited = doc.update_activity("d1", "a1", &patch);

    let day = edited.day("d1").expect("day d1");
    let order: Vec<&str> = day.activities.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(order, ["a2", "a3", "a4", "a1"]);
    assert_eq!(day.activities[3].time, "23:30");
}

#[test]
fn time_edit_sort_is_non_decreasing() {
    let doc = seed_itinerary();
    let patch = ActivityPatch {
        time: Some("00:15".to_string()),
        ..Default::default()
    };
    let edited = doc.update_activity("d2", "a8", &patch);

    let times: Vec<&str> = edited
        .day("d2")
        .expect("day d2")
        .activities
        .iter()
        .map(|a| a.time.as_str())
        .collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}

#[test]
fn title_edit_does_not_resort() {
    let doc = seed_itinerary();
    let patch = ActivityPatch {
        title: Some("Group A Departure (DOH)".to_string()),
        ..Default::default()
    };
    let edited = doc.update_activity("d1", "a1", &patch);

    let day = edited.day("d1").expect("day d1");
    assert_eq!(day.activities[0].id, "a1");
    assert_eq!(day.activities[0].title, "Group A Departure (DOH)");
}

#[test]
fn editing_one_activity_leaves_siblings_untouched() {
    let doc = seed_itinerary();
    let patch = ActivityPatch {
        location: Some("Hamad International".to_string()),
        ..Default::default()
    };
    let edited = doc.update_activity("d1", "a1", &patch);

    let before = doc.day("d1").expect("day d1");
    let after = edited.day("d1").expect("day d1");
    for id in ["a2", "a3", "a4"] {
        let b = before.activities.iter().find(|a| a.id == id).expect("before");
        let a = after.activities.iter().find(|a| a.id == id).expect("after");
        assert_eq!(a, b, "sibling {id} changed");
    }
    // Other slices are carried over wholesale.
    assert_eq!(edited.travelers, doc.travelers);
    assert_eq!(edited.stays, doc.stays);
    assert_eq!(edited.expenses, doc.expenses);
    assert_eq!(edited.checklist, doc.checklist);
}

#[test]
fn stale_activity_id_is_a_no_op() {
    let doc = seed_itinerary();
    let patch = ActivityPatch {
        time: Some("06:00".to_string()),
        ..Default::default()
    };
    assert_eq!(doc.update_activity("d1", "nope", &patch), doc);
    assert_eq!(doc.update_activity("nope", "a1", &patch), doc);
}

#[test]
fn add_and_remove_activity() {
    let doc = seed_itinerary();
    let mut ids = SequentialIds::new("act");

    let added = doc.add_activity("d3", &mut ids);
    let day = added.day("d3").expect("day d3");
    assert_eq!(day.activities.len(), 3);
    // Default 12:00 slots between the 08:00 drive and the 12:00 church
    // visit; stable sort keeps the existing entry first.
    assert_eq!(day.activities[1].id, "a10");
    assert_eq!(day.activities[2].id, "act1");

    let removed = added.remove_activity("d3", "act1");
    assert_eq!(removed.day("d3").expect("day d3").activities.len(), 2);
}

#[test]
fn add_day_appends_empty_day() {
    let doc = seed_itinerary();
    let mut ids = SequentialIds::new("d");
    let edited = doc.add_day(doc.end_date, &mut ids);
    assert_eq!(edited.days.len(), 4);
    assert!(edited.days[3].activities.is_empty());
}

#[test]
fn add_traveler_requires_name() {
    let doc = seed_itinerary();
    let mut ids = SequentialIds::new("t");

    let draft = TravelerDraft {
        name: "   ".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        doc.add_traveler(&draft, &mut ids),
        Err(ModelError::EmptyTravelerName)
    ));

    let draft = TravelerDraft {
        name: "  Nino (Guide)  ".to_string(),
        group: "Local".to_string(),
        visa_status: VisaStatus::NotRequired,
        visa_required: false,
    };
    let edited = doc.add_traveler(&draft, &mut ids).expect("add traveler");
    assert_eq!(edited.travelers.len(), 7);
    let added = edited.travelers.last().expect("new traveler");
    assert_eq!(added.id, "t1");
    assert_eq!(added.name, "Nino (Guide)");
    assert_eq!(added.visa_status, VisaStatus::NotRequired);
}

#[test]
fn traveler_removal_does_not_cascade_into_name_references() {
    let doc = seed_itinerary();
    let edited = doc.remove_traveler("4"); // Rahul

    assert_eq!(edited.travelers.len(), 5);
    assert!(edited.traveler("4").is_none());

    // The name keeps appearing where it was referenced as a string.
    let stay = &edited.stays[0];
    assert!(stay.occupants.iter().any(|r| r.as_str() == "Rahul"));
    let deposit = edited
        .expenses
        .iter()
        .find(|e| e.id == "e2")
        .expect("expense e2");
    assert_eq!(deposit.paid_by.as_str(), "Rahul");
    assert!(deposit.split_between.iter().any(|r| r.as_str() == "Rahul"));
}

#[test]
fn update_traveler_status_and_requirement() {
    let doc = seed_itinerary();
    let patch = TravelerPatch {
        visa_status: Some(VisaStatus::InProgress),
        visa_required: Some(false),
        ..Default::default()
    };
    let edited = doc.update_traveler("4", &patch);

    let rahul = edited.traveler("4").expect("traveler 4");
    assert_eq!(rahul.visa_status, VisaStatus::InProgress);
    assert!(!rahul.visa_required);
    // Name untouched by a status-only patch.
    assert_eq!(rahul.name, "Rahul (Group B)");
}

#[test]
fn stay_crud() {
    let doc = seed_itinerary();
    let mut ids = SequentialIds::new("ns");

    let added = doc.add_stay(&mut ids);
    assert_eq!(added.stays.len(), 2);
    assert_eq!(added.stays[1].check_in, doc.start_date);
    assert_eq!(added.stays[1].check_out, doc.end_date);

    let patch = StayPatch {
        city: Some("Kazbegi".to_string()),
        hotel_name: Some("Rooms Hotel".to_string()),
        cost: Some(350.0),
        ..Default::default()
    };
    let updated = added.update_stay("s1", &patch);
    assert_eq!(updated.stays[0].city, "Kazbegi");
    assert_eq!(updated.stays[0].cost, 350.0);
    // Unpatched fields survive.
    assert_eq!(updated.stays[0].room_type, "2x Double, 1x Single");

    let removed = updated.remove_stay("s1");
    assert_eq!(removed.stays.len(), 1);
    assert_eq!(removed.stays[0].id, "ns1");
    assert_eq!(removed.stays[0].city, "");
}

#[test]
fn expense_defaults_follow_current_travelers() {
    let doc = seed_itinerary();
    let mut ids = SequentialIds::new("e");

    let edited = doc.add_expense(&mut ids);
    let added = edited.expenses.last().expect("new expense");
    assert_eq!(added.description, "New Expense");
    assert_eq!(added.amount, 0.0);
    assert_eq!(added.paid_by.as_str(), "Ahmad (Group A)");
    assert_eq!(added.split_between.len(), 6);

    // With no travelers the defaults degrade instead of failing.
    let empty = doc.remove_traveler("1").remove_traveler("2").remove_traveler("3");
    let empty = empty
        .remove_traveler("4")
        .remove_traveler("5")
        .remove_traveler("6");
    let edited = empty.add_expense(&mut ids);
    let added = edited.expenses.last().expect("new expense");
    assert_eq!(added.paid_by.as_str(), "");
    assert!(added.split_between.is_empty());
}

#[test]
fn expense_patch_and_removal() {
    let doc = seed_itinerary();
    let patch = ExpensePatch {
        amount: Some(950.0),
        description: Some("Group A Tickets (rebooked)".to_string()),
        ..Default::default()
    };
    let updated = doc.update_expense("e1", &patch);
    assert_eq!(updated.expenses[0].amount, 950.0);
    assert_eq!(updated.expenses[0].currency, "USD");

    let removed = updated.remove_expense("e1");
    assert_eq!(removed.expenses.len(), 1);
    assert_eq!(removed.expenses[0].id, "e2");
}

#[test]
fn checklist_toggle_is_an_involution() {
    let doc = seed_itinerary();

    let once = doc.toggle_checklist_item("c2");
    let c2 = once.checklist.iter().find(|i| i.id == "c2").expect("c2");
    assert!(c2.is_completed);

    let twice = once.toggle_checklist_item("c2");
    assert_eq!(twice.checklist, doc.checklist);
}

#[test]
fn checklist_add_edit_remove() {
    let doc = seed_itinerary();
    let mut ids = SequentialIds::new("c");

    let added = doc.add_checklist_item("Download offline maps", "Docs", &mut ids);
    assert_eq!(added.checklist.len(), 5);
    assert!(!added.checklist[4].is_completed);

    let renamed = added.update_checklist_task("c1", "Check passports (>6 months left)");
    assert_eq!(renamed.checklist[0].task, "Check passports (>6 months left)");

    let removed = renamed.remove_checklist_item("c3");
    assert_eq!(removed.checklist.len(), 4);
    assert!(removed.checklist.iter().all(|i| i.id != "c3"));
}
