use super::*;

// =============================================================
// List payload normalization
// =============================================================

#[test]
fn events_payload_accepts_bare_array() {
    let body = r#"[{"_id":"e-1","title":"Poya Lantern Night","date":"2026-03-10"}]"#;
    let payload: EventsPayload = serde_json::from_str(body).expect("bare array");
    let events = payload.into_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "e-1");
}

#[test]
fn events_payload_accepts_wrapped_object() {
    let body = r#"{"events":[{"id":"e-2","title":"Kandyan Dance","date":"2026-04-01"}]}"#;
    let payload: EventsPayload = serde_json::from_str(body).expect("wrapped object");
    let events = payload.into_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "e-2");
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn record_ids_accept_both_spellings() {
    let with_alias: Hotel =
        serde_json::from_str(r#"{"_id":"h-1","name":"Bentota Bay Resort"}"#).expect("_id");
    let canonical: Hotel =
        serde_json::from_str(r#"{"id":"h-1","name":"Bentota Bay Resort"}"#).expect("id");
    assert_eq!(with_alias.id, canonical.id);
}

#[test]
fn hotel_ref_accepts_bare_id_and_populated_record() {
    let bare: Event = serde_json::from_str(
        r#"{"id":"e-1","title":"Gala","date":"2026-05-01","hotelId":"h-9"}"#,
    )
    .expect("bare ref");
    assert_eq!(bare.hotel_id.id(), "h-9");

    let populated: Event = serde_json::from_str(
        r#"{"id":"e-1","title":"Gala","date":"2026-05-01",
            "hotelId":{"_id":"h-9","name":"Cinnamon Hills"}}"#,
    )
    .expect("populated ref");
    assert_eq!(populated.hotel_id.id(), "h-9");
}

#[test]
fn missing_is_published_defaults_to_true() {
    let event: Event =
        serde_json::from_str(r#"{"id":"e-1","title":"Gala","date":"2026-05-01"}"#).expect("event");
    assert!(event.is_published);
}

#[test]
fn bundle_tolerates_null_hotel() {
    let body = r#"{"event":{"id":"e-1","title":"Gala","date":"2026-05-01"},"hotel":null}"#;
    let bundle: EventDetailBundle = serde_json::from_str(body).expect("bundle");
    assert!(bundle.hotel.is_none());
    assert_eq!(bundle.event.id, "e-1");
}

// =============================================================
// Query building
// =============================================================

#[test]
fn empty_filters_render_no_query() {
    assert_eq!(EventFilters::default().to_query(), "");
}

#[test]
fn filters_are_joined_and_encoded() {
    let filters = EventFilters {
        city: Some("Nuwara Eliya".to_owned()),
        hotel_id: Some("h-1".to_owned()),
        from: Some("2026-08-06".to_owned()),
    };
    assert_eq!(
        filters.to_query(),
        "?city=Nuwara%20Eliya&hotelId=h-1&from=2026-08-06"
    );
}

// =============================================================
// Form drafts
// =============================================================

#[test]
fn event_draft_truncates_datetime_dates() {
    let event: Event = serde_json::from_str(
        r#"{"id":"e-1","title":"Gala","date":"2026-05-01T00:00:00.000Z","hotelId":"h-1"}"#,
    )
    .expect("event");
    let draft = EventDraft::from_event(&event);
    assert_eq!(draft.date, "2026-05-01");
    assert_eq!(draft.hotel_id, "h-1");
}

#[test]
fn event_draft_defaults_to_published_cultural() {
    let draft = EventDraft::default();
    assert!(draft.is_published);
    assert_eq!(draft.category, "cultural");
}

#[test]
fn adopting_a_hotel_location_skips_blank_fields() {
    let mut draft = EventDraft {
        location: EventLocation {
            venue: "Ballroom".to_owned(),
            city: "Galle".to_owned(),
            region: "Southern".to_owned(),
        },
        ..EventDraft::default()
    };
    let hotel = Hotel {
        id: "h-1".to_owned(),
        name: "Hilltop".to_owned(),
        description: String::new(),
        location: HotelLocation {
            address: String::new(),
            city: "Kandy".to_owned(),
            region: String::new(),
        },
        phone: None,
        email: None,
        website_url: None,
        booking_url: None,
        image_url: None,
    };

    draft.adopt_hotel_location(&hotel);

    assert_eq!(draft.location.city, "Kandy");
    assert_eq!(draft.location.region, "Southern");
    assert_eq!(draft.location.venue, "Ballroom");
}

#[test]
fn hotel_draft_prefills_optional_fields_as_empty() {
    let hotel: Hotel =
        serde_json::from_str(r#"{"id":"h-1","name":"Bay Resort","phone":"0112345678"}"#)
            .expect("hotel");
    let draft = HotelDraft::from_hotel(&hotel);
    assert_eq!(draft.phone, "0112345678");
    assert_eq!(draft.website_url, "");
}

#[test]
fn drafts_serialize_in_wire_case() {
    let draft = EventDraft {
        hotel_id: "h-1".to_owned(),
        ..EventDraft::default()
    };
    let value = serde_json::to_value(&draft).expect("serialize");
    assert_eq!(value["hotelId"], "h-1");
    assert_eq!(value["isPublished"], true);
}
