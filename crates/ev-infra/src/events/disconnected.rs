use async_trait::async_trait;
use tracing::warn;

use ev_core::events::EventsResponse;
use ev_core::ports::{EventsError, EventsPort, GetEventsParams};

/// Discovery adapter used when no events API is configured.
#[derive(Debug, Default, Clone)]
pub struct DisconnectedEventsProvider;

impl DisconnectedEventsProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventsPort for DisconnectedEventsProvider {
    async fn get_events(&self, params: &GetEventsParams) -> Result<EventsResponse, EventsError> {
        warn!(
            city = params.city.as_deref().unwrap_or(""),
            "event search attempted without events API"
        );
        Err(EventsError::Transport("no events API configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_is_a_transport_error() {
        let err = DisconnectedEventsProvider::new()
            .get_events(&GetEventsParams::default())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            EventsError::Transport("no events API configured".to_string())
        );
    }
}
