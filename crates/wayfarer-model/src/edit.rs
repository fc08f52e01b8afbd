//! Document-replacing edit operations.
//!
//! Every operation takes `&self` and returns a new [`Itinerary`] in which
//! exactly one slice has been rebuilt (mapped, filtered or appended); all
//! sibling entities and all other slices are carried over unchanged. The
//! caller hands the returned document to the document store.
//!
//! Operations addressed at an id that no longer exists return the document
//! unchanged; a stale edit is a no-op, not an error.

use chrono::NaiveDate;

use crate::enums::{ActivityTag, ExpenseCategory, VisaStatus};
use crate::error::{ModelError, Result};
use crate::ids::{IdSource, TravelerRef};
use crate::itinerary::{
    Activity, ChecklistItem, DayItinerary, Expense, Itinerary, Stay, Traveler,
};

/// Partial update for one activity. Unset fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct ActivityPatch {
    pub time: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub tag: Option<ActivityTag>,
}

/// Fields captured by the add-traveler dialog.
#[derive(Debug, Clone)]
pub struct TravelerDraft {
    pub name: String,
    pub group: String,
    pub visa_status: VisaStatus,
    pub visa_required: bool,
}

impl Default for TravelerDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            group: "A".to_string(),
            visa_status: VisaStatus::Pending,
            visa_required: true,
        }
    }
}

/// Partial update for one traveler.
///
/// A name change deliberately does not cascade into stay occupants or
/// expense references; see [`TravelerRef`].
#[derive(Debug, Clone, Default)]
pub struct TravelerPatch {
    pub name: Option<String>,
    pub group: Option<String>,
    pub visa_status: Option<VisaStatus>,
    pub visa_required: Option<bool>,
}

/// Partial update for one stay.
#[derive(Debug, Clone, Default)]
pub struct StayPatch {
    pub city: Option<String>,
    pub hotel_name: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub room_type: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

/// Partial update for one expense.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub category: Option<ExpenseCategory>,
    pub description: Option<String>,
    pub paid_by: Option<TravelerRef>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

impl Itinerary {
    // --- Calendar ---

    /// Apply a patch to one activity of one day.
    ///
    /// When the patch carries a time, the owning day's activities are
    /// re-sorted ascending by time. The sort is stable, so activities with
    /// equal times keep their relative order.
    pub fn update_activity(&self, day_id: &str, activity_id: &str, patch: &ActivityPatch) -> Self {
        let days = self
            .days
            .iter()
            .map(|day| {
                if day.id != day_id {
                    return day.clone();
                }
                let mut activities: Vec<Activity> = day
                    .activities
                    .iter()
                    .map(|a| {
                        if a.id != activity_id {
                            return a.clone();
                        }
                        let mut updated = a.clone();
                        if let Some(time) = &patch.time {
                            updated.time = time.clone();
                        }
                        if let Some(title) = &patch.title {
                            updated.title = title.clone();
                        }
                        if let Some(location) = &patch.location {
                            updated.location = location.clone();
                        }
                        if let Some(notes) = &patch.notes {
                            updated.notes = notes.clone();
                        }
                        if let Some(tag) = patch.tag {
                            updated.tag = tag;
                        }
                        updated
                    })
                    .collect();
                if patch.time.is_some() {
                    activities.sort_by(|a, b| a.time.cmp(&b.time));
                }
                DayItinerary {
                    id: day.id.clone(),
                    date: day.date,
                    activities,
                }
            })
            .collect();
        Self {
            days,
            ..self.clone()
        }
    }

    /// Append a blank activity to one day, keeping the day time-sorted.
    pub fn add_activity(&self, day_id: &str, ids: &mut dyn IdSource) -> Self {
        let activity = Activity {
            id: ids.next_id(),
            time: "12:00".to_string(),
            title: "New Activity".to_string(),
            location: String::new(),
            lat: None,
            lng: None,
            notes: String::new(),
            tag: ActivityTag::Sightseeing,
        };
        let days = self
            .days
            .iter()
            .map(|day| {
                if day.id != day_id {
                    return day.clone();
                }
                let mut activities = day.activities.clone();
                activities.push(activity.clone());
                activities.sort_by(|a, b| a.time.cmp(&b.time));
                DayItinerary {
                    id: day.id.clone(),
                    date: day.date,
                    activities,
                }
            })
            .collect();
        Self {
            days,
            ..self.clone()
        }
    }

    /// Remove one activity from one day.
    pub fn remove_activity(&self, day_id: &str, activity_id: &str) -> Self {
        let days = self
            .days
            .iter()
            .map(|day| {
                if day.id != day_id {
                    return day.clone();
                }
                DayItinerary {
                    id: day.id.clone(),
                    date: day.date,
                    activities: day
                        .activities
                        .iter()
                        .filter(|a| a.id != activity_id)
                        .cloned()
                        .collect(),
                }
            })
            .collect();
        Self {
            days,
            ..self.clone()
        }
    }

    /// Append a new empty day. Chronological ordering of days is the
    /// caller's responsibility.
    pub fn add_day(&self, date: NaiveDate, ids: &mut dyn IdSource) -> Self {
        let mut days = self.days.clone();
        days.push(DayItinerary {
            id: ids.next_id(),
            date,
            activities: Vec::new(),
        });
        Self {
            days,
            ..self.clone()
        }
    }

    // --- Travelers ---

    /// Add a traveler from the dialog draft. The name must be non-empty
    /// after trimming.
    pub fn add_traveler(&self, draft: &TravelerDraft, ids: &mut dyn IdSource) -> Result<Self> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ModelError::EmptyTravelerName);
        }
        let mut travelers = self.travelers.clone();
        travelers.push(Traveler {
            id: ids.next_id(),
            name: name.to_string(),
            group: draft.group.clone(),
            visa_status: draft.visa_status,
            visa_required: draft.visa_required,
        });
        Ok(Self {
            travelers,
            ..self.clone()
        })
    }

    /// Apply a patch to one traveler.
    pub fn update_traveler(&self, traveler_id: &str, patch: &TravelerPatch) -> Self {
        let travelers = self
            .travelers
            .iter()
            .map(|t| {
                if t.id != traveler_id {
                    return t.clone();
                }
                let mut updated = t.clone();
                if let Some(name) = &patch.name {
                    updated.name = name.clone();
                }
                if let Some(group) = &patch.group {
                    updated.group = group.clone();
                }
                if let Some(status) = patch.visa_status {
                    updated.visa_status = status;
                }
                if let Some(required) = patch.visa_required {
                    updated.visa_required = required;
                }
                updated
            })
            .collect();
        Self {
            travelers,
            ..self.clone()
        }
    }

    /// Remove one traveler by id. Stay occupants and expense references
    /// naming the traveler are left untouched.
    pub fn remove_traveler(&self, traveler_id: &str) -> Self {
        Self {
            travelers: self
                .travelers
                .iter()
                .filter(|t| t.id != traveler_id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    // --- Stays ---

    /// Append a blank stay spanning the trip range.
    pub fn add_stay(&self, ids: &mut dyn IdSource) -> Self {
        let mut stays = self.stays.clone();
        stays.push(Stay {
            id: ids.next_id(),
            city: String::new(),
            hotel_name: String::new(),
            check_in: self.start_date,
            check_out: self.end_date,
            room_type: String::new(),
            occupants: Vec::new(),
            cost: 0.0,
            notes: String::new(),
        });
        Self {
            stays,
            ..self.clone()
        }
    }

    /// Apply a patch to one stay.
    pub fn update_stay(&self, stay_id: &str, patch: &StayPatch) -> Self {
        let stays = self
            .stays
            .iter()
            .map(|s| {
                if s.id != stay_id {
                    return s.clone();
                }
                let mut updated = s.clone();
                if let Some(city) = &patch.city {
                    updated.city = city.clone();
                }
                if let Some(hotel_name) = &patch.hotel_name {
                    updated.hotel_name = hotel_name.clone();
                }
                if let Some(check_in) = patch.check_in {
                    updated.check_in = check_in;
                }
                if let Some(check_out) = patch.check_out {
                    updated.check_out = check_out;
                }
                if let Some(room_type) = &patch.room_type {
                    updated.room_type = room_type.clone();
                }
                if let Some(cost) = patch.cost {
                    updated.cost = cost;
                }
                if let Some(notes) = &patch.notes {
                    updated.notes = notes.clone();
                }
                updated
            })
            .collect();
        Self {
            stays,
            ..self.clone()
        }
    }

    /// Remove one stay by id.
    pub fn remove_stay(&self, stay_id: &str) -> Self {
        Self {
            stays: self
                .stays
                .iter()
                .filter(|s| s.id != stay_id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    // --- Expenses ---

    /// Append a default expense: category Food, zero amount, paid by the
    /// first traveler and split across everyone. With no travelers the
    /// payer reference is empty and the split list is empty.
    pub fn add_expense(&self, ids: &mut dyn IdSource) -> Self {
        let paid_by = self
            .travelers
            .first()
            .map(|t| TravelerRef::new(t.name.clone()))
            .unwrap_or_else(|| TravelerRef::new(""));
        let mut expenses = self.expenses.clone();
        expenses.push(Expense {
            id: ids.next_id(),
            category: ExpenseCategory::Food,
            description: "New Expense".to_string(),
            paid_by,
            amount: 0.0,
            currency: "USD".to_string(),
            split_between: self
                .travelers
                .iter()
                .map(|t| TravelerRef::new(t.name.clone()))
                .collect(),
        });
        Self {
            expenses,
            ..self.clone()
        }
    }

    /// Apply a patch to one expense.
    pub fn update_expense(&self, expense_id: &str, patch: &ExpensePatch) -> Self {
        let expenses = self
            .expenses
            .iter()
            .map(|e| {
                if e.id != expense_id {
                    return e.clone();
                }
                let mut updated = e.clone();
                if let Some(category) = patch.category {
                    updated.category = category;
                }
                if let Some(description) = &patch.description {
                    updated.description = description.clone();
                }
                if let Some(paid_by) = &patch.paid_by {
                    updated.paid_by = paid_by.clone();
                }
                if let Some(amount) = patch.amount {
                    updated.amount = amount;
                }
                if let Some(currency) = &patch.currency {
                    updated.currency = currency.clone();
                }
                updated
            })
            .collect();
        Self {
            expenses,
            ..self.clone()
        }
    }

    /// Remove one expense by id.
    pub fn remove_expense(&self, expense_id: &str) -> Self {
        Self {
            expenses: self
                .expenses
                .iter()
                .filter(|e| e.id != expense_id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    // --- Checklist ---

    /// Flip the completion flag of one checklist item.
    pub fn toggle_checklist_item(&self, item_id: &str) -> Self {
        let checklist = self
            .checklist
            .iter()
            .map(|item| {
                if item.id != item_id {
                    return item.clone();
                }
                ChecklistItem {
                    is_completed: !item.is_completed,
                    ..item.clone()
                }
            })
            .collect();
        Self {
            checklist,
            ..self.clone()
        }
    }

    /// Append a checklist item.
    pub fn add_checklist_item(&self, task: &str, category: &str, ids: &mut dyn IdSource) -> Self {
        let mut checklist = self.checklist.clone();
        checklist.push(ChecklistItem {
            id: ids.next_id(),
            task: task.to_string(),
            is_completed: false,
            category: category.to_string(),
        });
        Self {
            checklist,
            ..self.clone()
        }
    }

    /// Remove one checklist item by id.
    pub fn remove_checklist_item(&self, item_id: &str) -> Self {
        Self {
            checklist: self
                .checklist
                .iter()
                .filter(|item| item.id != item_id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Replace the task text of one checklist item.
    pub fn update_checklist_task(&self, item_id: &str, task: &str) -> Self {
        let checklist = self
            .checklist
            .iter()
            .map(|item| {
                if item.id != item_id {
                    return item.clone();
                }
                ChecklistItem {
                    task: task.to_string(),
                    ..item.clone()
                }
            })
            .collect();
        Self {
            checklist,
            ..self.clone()
        }
    }
}
