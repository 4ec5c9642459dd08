//! Event discovery models.
//!
//! Mirrors the discovery API's event shape. Only the fields the app reads are
//! modeled; unknown fields are ignored on decode.

mod map;
mod view;

pub use map::{MapMarker, MapRegion};
pub use view::ViewType;

use serde::{Deserialize, Serialize};

use crate::ids::EventId;

/// One page of discovery results.
///
/// 发现接口返回的一页结果。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsResponse {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<EmbeddedEvents>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
}

impl EventsResponse {
    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            embedded: Some(EmbeddedEvents { events }),
            page: None,
        }
    }

    /// Events on this page; a missing `_embedded` block means none.
    pub fn into_events(self) -> Vec<Event> {
        self.embedded.map(|e| e.events).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedEvents {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
}

/// A discoverable event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub locale: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<EventImage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<EventDates>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<Classification>,

    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<EmbeddedVenues>,
}

impl Event {
    pub fn new(id: impl Into<EventId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: "event".to_string(),
            url: String::new(),
            locale: String::new(),
            images: Vec::new(),
            dates: None,
            classifications: Vec::new(),
            embedded: None,
        }
    }

    pub fn with_venue(mut self, venue: Venue) -> Self {
        self.embedded
            .get_or_insert_with(EmbeddedVenues::default)
            .venues
            .push(venue);
        self
    }

    /// First listed venue; the one shown on cards and the map.
    pub fn primary_venue(&self) -> Option<&Venue> {
        self.embedded.as_ref().and_then(|e| e.venues.first())
    }

    pub fn image_url(&self) -> Option<&str> {
        self.images.first().map(|i| i.url.as_str())
    }

    pub fn start_date(&self) -> Option<&str> {
        self.dates.as_ref().map(|d| d.start.local_date.as_str())
    }

    pub fn segment(&self) -> Option<&str> {
        self.classifications
            .first()
            .and_then(|c| c.segment.as_ref())
            .map(|n| n.name.as_str())
    }

    pub fn genre(&self) -> Option<&str> {
        self.classifications
            .first()
            .and_then(|c| c.genre.as_ref())
            .map(|n| n.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventImage {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDates {
    pub start: EventStart,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStart {
    pub local_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<NamedClass>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<NamedClass>,

    #[serde(rename = "subGenre", default, skip_serializing_if = "Option::is_none")]
    pub sub_genre: Option<NamedClass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedClass {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedVenues {
    #[serde(default)]
    pub venues: Vec<Venue>,
}

/// Where an event takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<VenueLocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<VenueAddress>,
}

impl Venue {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: "venue".to_string(),
            location: None,
            address: None,
        }
    }

    pub fn located_at(mut self, latitude: &str, longitude: &str) -> Self {
        self.location = Some(VenueLocation {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        });
        self
    }
}

/// Coordinates as the API sends them: decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueLocation {
    pub latitude: String,
    pub longitude: String,
}

impl VenueLocation {
    /// Parsed `(latitude, longitude)`.
    ///
    /// `None` when either value is blank, not a number, or outside the valid
    /// range.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let latitude: f64 = self.latitude.trim().parse().ok()?;
        let longitude: f64 = self.longitude.trim().parse().ok()?;
        let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        valid.then_some((latitude, longitude))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
