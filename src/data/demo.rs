//! Embedded demo dataset for browser builds and `--demo` runs.
//!
//! A curated monthly slice of the Brent history with hand-checked change
//! points and annotations, bundled into the binary so the wasm build never
//! attempts network operations.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::data::source::{DashboardSource, FetchError, PriceSeriesPayload, non_empty};
use crate::models::{ChangePoint, MarketEvent, PriceSeries};

const DEMO_PRICES_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demo_data/brent_prices.json"
));
const DEMO_CHANGE_POINTS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demo_data/change_points.json"
));
const DEMO_EVENTS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demo_data/events.json"
));

pub struct DemoSource;

impl DemoSource {
    fn decode<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T> {
        serde_json::from_str(raw).with_context(|| format!("Failed to decode embedded demo {what}"))
    }
}

impl DashboardSource for DemoSource {
    fn fetch_prices(&self) -> Result<PriceSeries, FetchError> {
        let payload: PriceSeriesPayload = Self::decode(DEMO_PRICES_JSON, "price series")
            .map_err(|e| FetchError::Decode(format!("{e:#}")))?;
        payload.into_series()
    }

    fn fetch_change_points(&self) -> Result<Vec<ChangePoint>, FetchError> {
        let rows = Self::decode(DEMO_CHANGE_POINTS_JSON, "change points")
            .map_err(|e| FetchError::Decode(format!("{e:#}")))?;
        non_empty(rows)
    }

    fn fetch_events(&self) -> Result<Vec<MarketEvent>, FetchError> {
        let rows = Self::decode(DEMO_EVENTS_JSON, "events")
            .map_err(|e| FetchError::Decode(format!("{e:#}")))?;
        non_empty(rows)
    }

    fn signature(&self) -> &'static str {
        "Embedded Demo Dataset"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{event_for_change_point, event_type_options};
    use crate::utils::TimeUtils;

    #[test]
    fn demo_payloads_decode_and_agree_with_each_other() {
        let series = DemoSource.fetch_prices().unwrap();
        let change_points = DemoSource.fetch_change_points().unwrap();
        let events = DemoSource.fetch_events().unwrap();

        assert!(series.len() >= 100, "demo series should span several years");
        assert!(!change_points.is_empty());
        assert!(!events.is_empty());
        for cp in &change_points {
            assert!(
                cp.in_bounds(&series),
                "change point index {} outside series of {} rows",
                cp.index,
                series.len()
            );
        }
    }

    #[test]
    fn demo_dates_are_sortable_and_strictly_ascending() {
        let series = DemoSource.fetch_prices().unwrap();
        for pair in series.dates.windows(2) {
            assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
        }
        for date in &series.dates {
            assert!(
                TimeUtils::parse_date_label(date).is_some(),
                "unparseable label {date}"
            );
        }
        for event in DemoSource.fetch_events().unwrap() {
            assert!(
                TimeUtils::parse_date_label(&event.date).is_some(),
                "unparseable event date {}",
                event.date
            );
        }
    }

    #[test]
    fn demo_contains_matched_and_unmatched_change_points() {
        let series = DemoSource.fetch_prices().unwrap();
        let change_points = DemoSource.fetch_change_points().unwrap();
        let events = DemoSource.fetch_events().unwrap();

        let matched = change_points
            .iter()
            .filter(|cp| event_for_change_point(&series, cp, &events).is_some())
            .count();
        assert!(matched >= 1, "at least one break should line up with an event");
        assert!(
            matched < change_points.len(),
            "at least one break should have no matching event"
        );
    }

    #[test]
    fn demo_events_span_multiple_categories() {
        let events = DemoSource.fetch_events().unwrap();
        let options = event_type_options(&events);
        assert!(
            options.len() >= 4,
            "expected a varied type dropdown, got {options:?}"
        );
        assert!(
            options.contains(&"Event".to_owned()),
            "a typeless demo row should surface the default category"
        );
    }
}
