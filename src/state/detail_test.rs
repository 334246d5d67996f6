use super::*;

use crate::net::types::{Event, EventLocation, Hotel, HotelLocation, HotelRef};

fn event(id: &str) -> Event {
    Event {
        id: id.to_owned(),
        title: "Beach Festival".to_owned(),
        description: "Sunset drummers and street food.".to_owned(),
        date: "2026-03-10".to_owned(),
        start_time: "18:00".to_owned(),
        end_time: "22:00".to_owned(),
        location: EventLocation {
            venue: "Bentota Beach".to_owned(),
            city: "Bentota".to_owned(),
            region: "Southern".to_owned(),
        },
        category: "festival".to_owned(),
        price: 1500.0,
        image_url: None,
        hotel_id: HotelRef::Id("h-1".to_owned()),
        is_published: true,
    }
}

fn bundle(id: &str) -> EventDetailBundle {
    EventDetailBundle {
        event: event(id),
        hotel: Some(Hotel {
            id: "h-1".to_owned(),
            name: "Bentota Bay Resort".to_owned(),
            description: String::new(),
            location: HotelLocation::default(),
            phone: None,
            email: None,
            website_url: None,
            booking_url: None,
            image_url: None,
        }),
    }
}

// =============================================================
// Ticketing
// =============================================================

#[test]
fn begin_enters_loading_and_drops_previous_bundle() {
    let mut state = DetailState::default();
    let ticket = state.begin();
    assert!(state.finish(ticket, Ok(bundle("e-1"))));
    assert!(matches!(state.phase, DetailPhase::Ready(_)));

    state.begin();
    assert_eq!(state.phase, DetailPhase::Loading);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = DetailState::default();
    let ticket_a = state.begin();
    let ticket_b = state.begin();

    // B resolves first, then A's response arrives late.
    assert!(state.finish(ticket_b, Ok(bundle("e-b"))));
    assert!(!state.finish(ticket_a, Ok(bundle("e-a"))));

    match &state.phase {
        DetailPhase::Ready(bundle) => assert_eq!(bundle.event.id, "e-b"),
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[test]
fn stale_failure_cannot_clobber_newer_result() {
    let mut state = DetailState::default();
    let ticket_a = state.begin();
    let ticket_b = state.begin();

    assert!(state.finish(ticket_b, Ok(bundle("e-b"))));
    assert!(!state.finish(ticket_a, Err(ApiError::Network("timeout".to_owned()))));
    assert!(matches!(state.phase, DetailPhase::Ready(_)));
}

#[test]
fn failure_is_an_explicit_phase() {
    let mut state = DetailState::default();
    let ticket = state.begin();
    assert!(state.finish(
        ticket,
        Err(ApiError::Status {
            code: 404,
            message: None
        })
    ));
    assert_eq!(state.phase, DetailPhase::Failed);
}

#[test]
fn reset_invalidates_in_flight_ticket() {
    let mut state = DetailState::default();
    let ticket = state.begin();
    state.reset();

    assert!(!state.finish(ticket, Ok(bundle("e-1"))));
    assert_eq!(state.phase, DetailPhase::Idle);
}

// =============================================================
// Degradation
// =============================================================

#[test]
fn bundle_without_hotel_is_still_ready() {
    let mut state = DetailState::default();
    let ticket = state.begin();
    let orphan = EventDetailBundle {
        event: event("e-1"),
        hotel: None,
    };
    assert!(state.finish(ticket, Ok(orphan)));

    match &state.phase {
        DetailPhase::Ready(bundle) => assert!(bundle.hotel.is_none()),
        other => panic!("expected Ready, got {other:?}"),
    }
}
