#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user identity as returned by `/auth/me`.
///
/// Opaque beyond display: nothing in the client interprets these fields for
/// authorization decisions beyond "is a user present".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Where an event takes place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLocation {
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
}

/// A hotel-hosted event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO date or datetime string; only the calendar day is significant.
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub location: EventLocation,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub hotel_id: HotelRef,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

/// The backend returns `hotelId` either as a bare id string or as a
/// populated hotel record, depending on the endpoint. Both shapes are
/// normalized here rather than probed at each call site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotelRef {
    Id(String),
    Embedded(Box<Hotel>),
}

impl HotelRef {
    /// The referenced hotel's id, whichever shape was sent.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Embedded(hotel) => &hotel.id,
        }
    }
}

impl Default for HotelRef {
    fn default() -> Self {
        Self::Id(String::new())
    }
}

/// A hotel's street address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelLocation {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
}

/// A hotel profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: HotelLocation,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub booking_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The combined record served by `/event-details/{id}`.
///
/// `hotel` is `None` when the event's hotel cannot be resolved; display
/// degrades to the event alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDetailBundle {
    pub event: Event,
    #[serde(default)]
    pub hotel: Option<Hotel>,
}

/// The two accepted list shapes for event collections: a bare array or a
/// `{"events": [...]}` wrapper. Normalized at the transport boundary so no
/// component ever sees the difference.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum EventsPayload {
    List(Vec<Event>),
    Wrapped { events: Vec<Event> },
}

impl EventsPayload {
    /// Collapse either shape into the canonical container.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        match self {
            Self::List(events) | Self::Wrapped { events } => events,
        }
    }
}

/// Response of the Google credential exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Response of `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub user: User,
}

/// Query filters for the public events listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilters {
    pub city: Option<String>,
    pub hotel_id: Option<String>,
    /// Inclusive lower bound on the event date, `YYYY-MM-DD`.
    pub from: Option<String>,
}

impl EventFilters {
    /// Render as a query string, empty when no filter is set.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(city) = &self.city {
            pairs.push(format!("city={}", urlencoding::encode(city)));
        }
        if let Some(hotel_id) = &self.hotel_id {
            pairs.push(format!("hotelId={}", urlencoding::encode(hotel_id)));
        }
        if let Some(from) = &self.from {
            pairs.push(format!("from={}", urlencoding::encode(from)));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Event fields sent on create/update.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub hotel_id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: EventLocation,
    pub category: String,
    pub image_url: String,
    pub price: f64,
    pub is_published: bool,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            hotel_id: String::new(),
            title: String::new(),
            description: String::new(),
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            location: EventLocation::default(),
            category: "cultural".to_owned(),
            image_url: String::new(),
            price: 0.0,
            is_published: true,
        }
    }
}

impl EventDraft {
    /// Prefill the form from an existing event for editing.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            hotel_id: event.hotel_id.id().to_owned(),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.chars().take(10).collect(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            location: event.location.clone(),
            category: if event.category.is_empty() {
                "cultural".to_owned()
            } else {
                event.category.clone()
            },
            image_url: event.image_url.clone().unwrap_or_default(),
            price: event.price,
            is_published: event.is_published,
        }
    }

    /// Adopt the selected hotel's city/region so event venues default to the
    /// hotel's location. Blank hotel fields leave the draft untouched.
    pub fn adopt_hotel_location(&mut self, hotel: &Hotel) {
        if !hotel.location.city.is_empty() {
            self.location.city = hotel.location.city.clone();
        }
        if !hotel.location.region.is_empty() {
            self.location.region = hotel.location.region.clone();
        }
    }
}

/// Hotel fields sent on create/update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDraft {
    pub name: String,
    pub description: String,
    pub location: HotelLocation,
    pub website_url: String,
    pub booking_url: String,
    pub phone: String,
    pub email: String,
    pub image_url: String,
}

impl HotelDraft {
    /// Prefill the form from an existing hotel for editing.
    #[must_use]
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            description: hotel.description.clone(),
            location: hotel.location.clone(),
            website_url: hotel.website_url.clone().unwrap_or_default(),
            booking_url: hotel.booking_url.clone().unwrap_or_default(),
            phone: hotel.phone.clone().unwrap_or_default(),
            email: hotel.email.clone().unwrap_or_default(),
            image_url: hotel.image_url.clone().unwrap_or_default(),
        }
    }
}

fn default_true() -> bool {
    true
}
