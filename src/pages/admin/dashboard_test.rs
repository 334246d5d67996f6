use super::*;

use crate::net::types::{EventLocation, Hotel, HotelLocation, HotelRef};

fn event(id: &str, hotel_ref: HotelRef) -> Event {
    Event {
        id: id.to_owned(),
        title: "Event".to_owned(),
        description: String::new(),
        date: "2026-03-10".to_owned(),
        start_time: String::new(),
        end_time: String::new(),
        location: EventLocation::default(),
        category: String::new(),
        price: 0.0,
        image_url: None,
        hotel_id: hotel_ref,
        is_published: true,
    }
}

// =============================================================
// Grouping events per hotel
// =============================================================

#[test]
fn events_group_under_their_hotel_id() {
    let events = vec![
        event("e-1", HotelRef::Id("h-1".to_owned())),
        event("e-2", HotelRef::Id("h-2".to_owned())),
        event("e-3", HotelRef::Id("h-1".to_owned())),
    ];

    let grouped = group_events_by_hotel(&events);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["h-1"].len(), 2);
    assert_eq!(grouped["h-2"].len(), 1);
}

#[test]
fn populated_hotel_refs_group_by_embedded_id() {
    let embedded = HotelRef::Embedded(Box::new(Hotel {
        id: "h-1".to_owned(),
        name: "Bay Resort".to_owned(),
        description: String::new(),
        location: HotelLocation::default(),
        phone: None,
        email: None,
        website_url: None,
        booking_url: None,
        image_url: None,
    }));
    let events = vec![
        event("e-1", embedded),
        event("e-2", HotelRef::Id("h-1".to_owned())),
    ];

    let grouped = group_events_by_hotel(&events);
    assert_eq!(grouped["h-1"].len(), 2);
}
