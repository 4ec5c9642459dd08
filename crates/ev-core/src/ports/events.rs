use async_trait::async_trait;
use serde::Serialize;

use crate::events::EventsResponse;
use crate::ports::errors::EventsError;

/// Query for one page of discovery results.
///
/// Serialized as the request's query parameters; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEventsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Event discovery API.
///
/// 活动发现接口端口。
#[async_trait]
pub trait EventsPort: Send + Sync {
    async fn get_events(&self, params: &GetEventsParams) -> Result<EventsResponse, EventsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_params_are_left_out_of_the_query() {
        let params = GetEventsParams {
            city: Some("Dubai".to_string()),
            country_code: Some("AE".to_string()),
            size: Some(50),
            ..GetEventsParams::default()
        };

        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "city": "Dubai", "countryCode": "AE", "size": 50 })
        );
    }
}
