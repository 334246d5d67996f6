use super::*;

use crate::net::types::HotelRef;

fn event(id: &str, date: &str) -> Event {
    Event {
        id: id.to_owned(),
        title: "Event".to_owned(),
        description: String::new(),
        date: date.to_owned(),
        start_time: String::new(),
        end_time: String::new(),
        location: crate::net::types::EventLocation::default(),
        category: String::new(),
        price: 0.0,
        image_url: None,
        hotel_id: HotelRef::Id("h-1".to_owned()),
        is_published: true,
    }
}

// =============================================================
// Day bucketing
// =============================================================

#[test]
fn events_on_matches_dates_and_datetimes() {
    let events = vec![
        event("e-1", "2026-03-10"),
        event("e-2", "2026-03-10T20:00:00.000Z"),
        event("e-3", "2026-03-11"),
        event("e-4", "garbled"),
    ];
    let day = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    let matched = events_on(&events, day);
    let ids: Vec<&str> = matched.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["e-1", "e-2"]);
}

#[test]
fn events_on_empty_day_is_empty() {
    let events = vec![event("e-1", "2026-03-10")];
    let day = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
    assert!(events_on(&events, day).is_empty());
}
