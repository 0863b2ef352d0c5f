//! Blocking client for the analysis backend.
//!
//! The dashboard makes exactly three one-shot GETs at startup, each from its
//! own worker thread, so a plain blocking client is all this needs.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::API;
use crate::data::source::{DashboardSource, FetchError, PriceSeriesPayload, non_empty};
use crate::models::{ChangePoint, MarketEvent, PriceSeries};

pub struct ApiSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiSource {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(API.client.timeout_secs))
            .user_agent(API.client.user_agent)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("{url} returned HTTP {status}")));
        }

        response
            .json::<T>()
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl DashboardSource for ApiSource {
    fn fetch_prices(&self) -> Result<PriceSeries, FetchError> {
        self.get_json::<PriceSeriesPayload>(API.endpoints.prices)?
            .into_series()
    }

    fn fetch_change_points(&self) -> Result<Vec<ChangePoint>, FetchError> {
        non_empty(self.get_json(API.endpoints.change_points)?)
    }

    fn fetch_events(&self) -> Result<Vec<MarketEvent>, FetchError> {
        non_empty(self.get_json(API.endpoints.events)?)
    }

    fn signature(&self) -> &'static str {
        "Backend API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized_without_a_trailing_slash() {
        let source = ApiSource::new("http://127.0.0.1:5000/");
        assert_eq!(source.base_url, "http://127.0.0.1:5000");
    }
}
