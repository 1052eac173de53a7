//! Location Commands
//!
//! Geocoder suggestions (external, no CSRF header) and saving the chosen
//! location on the profile.

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde::Serialize;

use super::{read_ack, read_json, ApiClient};
use crate::config::GeocoderConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::LocationSuggestion;

#[derive(Serialize)]
struct LocationArgs<'a> {
    location: &'a str,
}

#[async_trait(?Send)]
pub trait LocationBackend {
    async fn search_locations(&self, query: &str) -> ApiResult<Vec<LocationSuggestion>>;

    async fn save_location(&self, location: &str) -> ApiResult<()>;
}

/// Geocoder search URL for `query`
fn search_url(geocoder: &GeocoderConfig, query: &str) -> ApiResult<Url> {
    let limit = geocoder.limit.to_string();
    Url::parse_with_params(
        &geocoder.url,
        &[("format", "json"), ("q", query), ("limit", limit.as_str())],
    )
    .map_err(|e| ApiError::Url(e.to_string()))
}

#[async_trait(?Send)]
impl LocationBackend for ApiClient {
    async fn search_locations(&self, query: &str) -> ApiResult<Vec<LocationSuggestion>> {
        let url = search_url(&self.config().geocoder, query)?;
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }

    async fn save_location(&self, location: &str) -> ApiResult<()> {
        let response = self
            .request(Method::POST, &self.config().endpoints.update_location)
            .json(&LocationArgs { location })
            .send()
            .await?;
        read_ack(response, "location").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url(&GeocoderConfig::default(), "Cluj Napoca, RO").unwrap();
        assert_eq!(url.host_str(), Some("nominatim.openstreetmap.org"));
        assert_eq!(
            url.query(),
            Some("format=json&q=Cluj+Napoca%2C+RO&limit=5")
        );
    }

    #[test]
    fn test_suggestions_decode() {
        let results: Vec<LocationSuggestion> = serde_json::from_str(
            r#"[{"place_id": 123, "display_name": "Cluj-Napoca, Romania", "lat": "46.77", "lon": "23.59", "type": "city"}]"#,
        )
        .unwrap();
        assert_eq!(results[0].display_name, "Cluj-Napoca, Romania");
    }
}
