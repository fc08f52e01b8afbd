//! The built-in seed document.
//!
//! Used on first launch and whenever the persisted snapshot is missing or
//! no longer deserializes. The data describes the February 2025 Georgia
//! trip the application shipped with.

use chrono::NaiveDate;

use crate::derived::GeoPoint;
use crate::enums::{ActivityTag, ExpenseCategory, VisaStatus};
use crate::ids::TravelerRef;
use crate::itinerary::{
    Activity, ChecklistItem, DayItinerary, Expense, Itinerary, Stay, Traveler, TripSummary,
};

/// Default map center (Tbilisi) used until a day with waypoints is selected.
pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint {
    lat: 41.7151,
    lng: 44.8271,
};

/// Default map zoom level.
pub const DEFAULT_MAP_ZOOM: f64 = 12.0;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn traveler(id: &str, name: &str, group: &str, status: VisaStatus, required: bool) -> Traveler {
    Traveler {
        id: id.to_string(),
        name: name.to_string(),
        group: group.to_string(),
        visa_status: status,
        visa_required: required,
    }
}

#[allow(clippy::too_many_arguments)]
fn activity(
    id: &str,
    time: &str,
    title: &str,
    location: &str,
    lat: f64,
    lng: f64,
    tag: ActivityTag,
    notes: &str,
) -> Activity {
    Activity {
        id: id.to_string(),
        time: time.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        lat: Some(lat),
        lng: Some(lng),
        notes: notes.to_string(),
        tag,
    }
}

fn item(id: &str, task: &str, completed: bool, category: &str) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        task: task.to_string(),
        is_completed: completed,
        category: category.to_string(),
    }
}

fn refs(names: &[&str]) -> Vec<TravelerRef> {
    names.iter().map(|n| TravelerRef::new(*n)).collect()
}

/// Build the seed itinerary.
pub fn seed_itinerary() -> Itinerary {
    Itinerary {
        destination: "Georgia".to_string(),
        start_date: date(2025, 2, 13),
        end_date: date(2025, 2, 18),
        summary: TripSummary {
            highlights: vec![
                "Kazbegi Mountains".to_string(),
                "Old Tbilisi Walk".to_string(),
                "Wine Tasting in Kakheti".to_string(),
                "Mtskheta Ancient Capital".to_string(),
            ],
            emergency_contact: "+995 555 123 456 (Local Guide - Gogi)".to_string(),
            arrival_cities: vec!["Doha".to_string(), "Kochi".to_string()],
            departure_city: "Tbilisi".to_string(),
        },
        travelers: vec![
            traveler("1", "Ahmad (Group A)", "A", VisaStatus::Completed, false),
            traveler("2", "Sara (Group A)", "A", VisaStatus::Completed, false),
            traveler(
                "3",
                "Zayd (Group A - Child)",
                "A",
                VisaStatus::Completed,
                false,
            ),
            traveler("4", "Rahul (Group B)", "B", VisaStatus::Pending, true),
            traveler("5", "Priya (Group B)", "B", VisaStatus::Pending, true),
            traveler(
                "6",
                "Levan (Local Friend)",
                "Local",
                VisaStatus::NotRequired,
                false,
            ),
        ],
        days: vec![
            DayItinerary {
                id: "d1".to_string(),
                date: date(2025, 2, 13),
                activities: vec![
                    activity(
                        "a1",
                        "10:00",
                        "Group A Departure",
                        "Doha Airport (DOH)",
                        25.273,
                        51.608,
                        ActivityTag::Travel,
                        "Daytime flight",
                    ),
                    activity(
                        "a2",
                        "11:00",
                        "Group B Departure",
                        "Kochi Airport (COK)",
                        10.155,
                        76.391,
                        ActivityTag::Travel,
                        "Direct/Connecting flight",
                    ),
                    activity(
                        "a3",
                        "19:00",
                        "Arrival in Tbilisi",
                        "Tbilisi Intl Airport (TBS)",
                        41.669,
                        44.954,
                        ActivityTag::Travel,
                        "Collect SIM cards and exchange currency",
                    ),
                    activity(
                        "a4",
                        "20:30",
                        "Hotel Check-in",
                        "Radisson Blu Iveria",
                        41.704,
                        44.792,
                        ActivityTag::Hotel,
                        "Rest for the night",
                    ),
                ],
            },
            DayItinerary {
                id: "d2".to_string(),
                date: date(2025, 2, 14),
                activities: vec![
                    activity(
                        "a5",
                        "09:00",
                        "Breakfast at Hotel",
                        "Tbilisi",
                        41.704,
                        44.792,
                        ActivityTag::Food,
                        "Traditional Georgian breakfast",
                    ),
                    activity(
                        "a6",
                        "10:30",
                        "Old Tbilisi Walking Tour",
                        "Shardeni Street",
                        41.691,
                        44.808,
                        ActivityTag::Sightseeing,
                        "Visit Narikala Fortress and Bridge of Peace",
                    ),
                    activity(
                        "a7",
                        "13:00",
                        "Lunch at Shavi Lomi",
                        "Tbilisi",
                        41.710,
                        44.802,
                        ActivityTag::Food,
                        "Famous hidden gem",
                    ),
                    activity(
                        "a8",
                        "15:30",
                        "Mtskheta Visit",
                        "Jvari Monastery",
                        41.837,
                        44.733,
                        ActivityTag::Sightseeing,
                        "UNESCO World Heritage site",
                    ),
                ],
            },
            DayItinerary {
                id: "d3".to_string(),
                date: date(2025, 2, 15),
                activities: vec![
                    activity(
                        "a9",
                        "08:00",
                        "Drive to Kazbegi",
                        "Georgian Military Highway",
                        42.164,
                        44.712,
                        ActivityTag::Travel,
                        "Stop at Ananuri Fortress",
                    ),
                    activity(
                        "a10",
                        "12:00",
                        "Gergeti Trinity Church",
                        "Kazbegi",
                        42.662,
                        44.620,
                        ActivityTag::Sightseeing,
                        "4x4 vehicle required for the climb",
                    ),
                ],
            },
        ],
        stays: vec![Stay {
            id: "s1".to_string(),
            city: "Tbilisi".to_string(),
            hotel_name: "Radisson Blu Iveria".to_string(),
            check_in: date(2025, 2, 13),
            check_out: date(2025, 2, 18),
            room_type: "2x Double, 1x Single".to_string(),
            occupants: refs(&["Ahmad", "Sara", "Zayd", "Rahul", "Priya"]),
            cost: 1200.0,
            notes: "Central location".to_string(),
        }],
        expenses: vec![
            Expense {
                id: "e1".to_string(),
                category: ExpenseCategory::Flight,
                description: "Group A Tickets".to_string(),
                paid_by: TravelerRef::new("Ahmad"),
                amount: 800.0,
                currency: "USD".to_string(),
                split_between: refs(&["Ahmad", "Sara", "Zayd"]),
            },
            Expense {
                id: "e2".to_string(),
                category: ExpenseCategory::Hotel,
                description: "Accommodation Deposit".to_string(),
                paid_by: TravelerRef::new("Rahul"),
                amount: 400.0,
                currency: "USD".to_string(),
                split_between: refs(&["Ahmad", "Sara", "Rahul", "Priya"]),
            },
        ],
        checklist: vec![
            item("c1", "Check Passport Validity (>6 months)", true, "Docs"),
            item("c2", "Apply for E-Visa (Group B)", false, "Visa"),
            item("c3", "Pack heavy winter gear", false, "Packing"),
            item("c4", "Buy Travel Insurance", true, "Health"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_shape_matches_shipped_trip() {
        let seed = seed_itinerary();
        assert_eq!(seed.travelers.len(), 6);
        assert_eq!(seed.days.len(), 3);
        assert_eq!(seed.stays.len(), 1);
        assert_eq!(seed.expenses.len(), 2);
        assert_eq!(seed.checklist.len(), 4);
        assert_eq!(crate::derived::trip_duration_days(&seed), 6);
    }
}
