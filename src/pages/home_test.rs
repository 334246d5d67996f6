use super::*;

use crate::net::types::{EventLocation, HotelRef};

fn event(id: &str, title: &str, city: &str) -> Event {
    Event {
        id: id.to_owned(),
        title: title.to_owned(),
        description: String::new(),
        date: "2026-03-10".to_owned(),
        start_time: String::new(),
        end_time: String::new(),
        location: EventLocation {
            venue: String::new(),
            city: city.to_owned(),
            region: String::new(),
        },
        category: String::new(),
        price: 0.0,
        image_url: None,
        hotel_id: HotelRef::Id("h-1".to_owned()),
        is_published: true,
    }
}

// =============================================================
// Search & city filtering
// =============================================================

#[test]
fn search_matches_title_and_city_case_insensitively() {
    let events = vec![
        event("e-1", "Lantern Festival", "Kandy"),
        event("e-2", "Beach Party", "Bentota"),
    ];

    let by_title = filter_events(&events, "lantern", "all");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, "e-1");

    let by_city = filter_events(&events, "BENTOTA", "all");
    assert_eq!(by_city.len(), 1);
    assert_eq!(by_city[0].id, "e-2");
}

#[test]
fn city_chip_narrows_results() {
    let events = vec![
        event("e-1", "Lantern Festival", "Kandy"),
        event("e-2", "Drum Circle", "Kandy"),
        event("e-3", "Beach Party", "Bentota"),
    ];

    assert_eq!(filter_events(&events, "", "Kandy").len(), 2);
    assert_eq!(filter_events(&events, "", "all").len(), 3);
}

#[test]
fn search_and_chip_filters_compose() {
    let events = vec![
        event("e-1", "Lantern Festival", "Kandy"),
        event("e-2", "Lantern Parade", "Bentota"),
    ];
    let matched = filter_events(&events, "lantern", "Bentota");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "e-2");
}

// =============================================================
// City chips
// =============================================================

#[test]
fn cities_are_deduplicated_in_first_seen_order() {
    let events = vec![
        event("e-1", "A", "Kandy"),
        event("e-2", "B", "Bentota"),
        event("e-3", "C", "Kandy"),
        event("e-4", "D", ""),
    ];
    assert_eq!(cities_of(&events), ["Kandy", "Bentota"]);
}
