//! Map projection of discovery results.

use serde::Serialize;

use super::Event;
use crate::ids::EventId;

/// One pin on the events map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub event_id: EventId,
    pub title: String,
    /// Venue name, empty when the venue has none.
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl MapMarker {
    /// Pin for `event` at its primary venue.
    ///
    /// `None` when the event has no venue or the venue coordinates don't parse.
    pub fn for_event(event: &Event) -> Option<Self> {
        let venue = event.primary_venue()?;
        let (latitude, longitude) = venue.location.as_ref()?.coordinates()?;
        Some(Self {
            event_id: event.id.clone(),
            title: event.name.clone(),
            description: venue.name.clone(),
            latitude,
            longitude,
        })
    }

    /// Pins for every mappable event, in result order.
    pub fn collect(events: &[Event]) -> Vec<Self> {
        events.iter().filter_map(Self::for_event).collect()
    }
}

/// Visible map area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Dubai, zoomed out to the wider emirate.
    pub const DEFAULT: MapRegion = MapRegion {
        latitude: 25.2048,
        longitude: 55.2708,
        latitude_delta: 0.5,
        longitude_delta: 0.5,
    };

    const PADDING: f64 = 1.5;
    const MIN_DELTA: f64 = 0.1;

    /// Smallest padded region showing every marker; [`Self::DEFAULT`] when
    /// there are none.
    pub fn fitting(markers: &[MapMarker]) -> Self {
        let Some(first) = markers.first() else {
            return Self::DEFAULT;
        };

        let (mut min_lat, mut max_lat) = (first.latitude, first.latitude);
        let (mut min_lng, mut max_lng) = (first.longitude, first.longitude);
        for marker in &markers[1..] {
            min_lat = min_lat.min(marker.latitude);
            max_lat = max_lat.max(marker.latitude);
            min_lng = min_lng.min(marker.longitude);
            max_lng = max_lng.max(marker.longitude);
        }

        Self {
            latitude: (min_lat + max_lat) / 2.0,
            longitude: (min_lng + max_lng) / 2.0,
            latitude_delta: ((max_lat - min_lat) * Self::PADDING).max(Self::MIN_DELTA),
            longitude_delta: ((max_lng - min_lng) * Self::PADDING).max(Self::MIN_DELTA),
        }
    }
}
