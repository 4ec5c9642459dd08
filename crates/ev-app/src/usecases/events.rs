//! Event discovery search.
//!
//! Results are always scoped to the launch market. The keyword is optional;
//! a blank search lists everything in scope.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, info_span, Instrument};

use ev_core::events::{Event, MapMarker, MapRegion};
use ev_core::ports::{EventsError, EventsPort, GetEventsParams};

/// Market the discovery screen is scoped to.
pub const DISCOVERY_CITY: &str = "Dubai";
pub const DISCOVERY_COUNTRY_CODE: &str = "AE";
pub const DISCOVERY_PAGE_SIZE: u32 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchEventsError {
    #[error(transparent)]
    Provider(#[from] EventsError),
}

/// Empty-state shown instead of the grid or map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoResults {
    /// Echoed back to the user; `None` for an unfiltered search.
    pub search_term: Option<String>,
}

/// One search, ready for either presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSearchResults {
    pub keyword: Option<String>,
    pub events: Vec<Event>,
    /// Only events whose venue has usable coordinates.
    pub markers: Vec<MapMarker>,
    pub region: MapRegion,
}

impl EventSearchResults {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn no_results(&self) -> Option<NoResults> {
        self.is_empty().then(|| NoResults {
            search_term: self.keyword.clone(),
        })
    }
}

pub struct SearchEvents {
    events: Arc<dyn EventsPort>,
}

impl SearchEvents {
    pub fn new(events: Arc<dyn EventsPort>) -> Self {
        Self { events }
    }

    /// Query for `keyword`; surrounding whitespace is dropped and an empty
    /// keyword means no filter.
    pub fn params_for(keyword: &str) -> GetEventsParams {
        let keyword = keyword.trim();
        GetEventsParams {
            city: Some(DISCOVERY_CITY.to_string()),
            country_code: Some(DISCOVERY_COUNTRY_CODE.to_string()),
            keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
            size: Some(DISCOVERY_PAGE_SIZE),
            page: None,
        }
    }

    pub async fn execute(&self, keyword: &str) -> Result<EventSearchResults, SearchEventsError> {
        let params = Self::params_for(keyword);
        let span = info_span!(
            "usecase.search_events.execute",
            keyword = params.keyword.as_deref().unwrap_or("")
        );

        async {
            let events = self.events.get_events(&params).await?.into_events();
            let markers = MapMarker::collect(&events);
            let region = MapRegion::fitting(&markers);

            info!(
                events = events.len(),
                markers = markers.len(),
                "event search completed"
            );

            Ok(EventSearchResults {
                keyword: params.keyword.clone(),
                events,
                markers,
                region,
            })
        }
        .instrument(span)
        .await
    }
}
