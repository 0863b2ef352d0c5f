use std::fmt;

use serde::Deserialize;

use crate::models::{ChangePoint, MarketEvent, PriceSeries};

// ============================================================================
// FetchError: what went wrong for a single dashboard resource
// ============================================================================

/// Terminal failure for one resource fetch. Each resource fails on its own;
/// the rest of the dashboard keeps whatever it managed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure: unreachable host, timeout, non-2xx status.
    Network(String),
    /// Payload arrived but could not be decoded into the expected shape.
    Decode(String),
    /// Payload decoded cleanly but contained no rows.
    Empty,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(detail) => write!(f, "Network error: {detail}"),
            FetchError::Decode(detail) => write!(f, "Decode error: {detail}"),
            FetchError::Empty => write!(f, "Server returned no rows"),
        }
    }
}

impl std::error::Error for FetchError {}

// ============================================================================
// ResourceSlot: lifecycle of one independently fetched resource
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResourceSlot<T> {
    #[default]
    Pending,
    Ready(T),
    Failed(FetchError),
}

impl<T> ResourceSlot<T> {
    pub fn resolve(&mut self, result: Result<T, FetchError>) {
        *self = match result {
            Ok(value) => ResourceSlot::Ready(value),
            Err(error) => ResourceSlot::Failed(error),
        };
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ResourceSlot::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            ResourceSlot::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            ResourceSlot::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ResourceSlot::Pending)
    }
}

/// The three dashboard resources, in the order the status bar reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum ResourceKind {
    Prices,
    ChangePoints,
    Events,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Prices => write!(f, "Prices"),
            ResourceKind::ChangePoints => write!(f, "Change points"),
            ResourceKind::Events => write!(f, "Events"),
        }
    }
}

// ============================================================================
// Wire payloads
// ============================================================================

/// Body of the price series endpoint: two parallel arrays.
#[derive(Deserialize, Debug)]
pub struct PriceSeriesPayload {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
}

impl PriceSeriesPayload {
    /// Validate into the model type. Arrays must agree in length and must
    /// not be empty.
    pub fn into_series(self) -> Result<PriceSeries, FetchError> {
        let series = PriceSeries::from_parts(self.dates, self.prices)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        if series.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(series)
    }
}

pub(crate) fn non_empty<T>(rows: Vec<T>) -> Result<Vec<T>, FetchError> {
    if rows.is_empty() {
        Err(FetchError::Empty)
    } else {
        Ok(rows)
    }
}

// ============================================================================
// DashboardSource: where the three resources come from
// ============================================================================

/// One-shot synchronous fetches; the UI layer decides how to keep them off
/// the frame loop.
pub trait DashboardSource: Send + Sync {
    fn fetch_prices(&self) -> Result<PriceSeries, FetchError>;
    fn fetch_change_points(&self) -> Result<Vec<ChangePoint>, FetchError>;
    fn fetch_events(&self) -> Result<Vec<MarketEvent>, FetchError>;
    /// Short label for the status bar.
    fn signature(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_resolves_into_ready_and_failed() {
        let mut slot: ResourceSlot<u32> = ResourceSlot::default();
        assert!(slot.is_pending());

        slot.resolve(Ok(7));
        assert_eq!(slot.ready(), Some(&7));
        assert!(slot.failure().is_none());

        slot.resolve(Err(FetchError::Empty));
        assert_eq!(slot.failure(), Some(&FetchError::Empty));
        assert!(slot.ready().is_none());
    }

    #[test]
    fn payload_with_mismatched_arrays_is_a_decode_error() {
        let payload = PriceSeriesPayload {
            dates: vec!["2020-01-31".into()],
            prices: vec![58.16, 55.66],
        };
        match payload.into_series() {
            Err(FetchError::Decode(detail)) => {
                assert!(detail.contains("1 dates vs 2 prices"), "got: {detail}")
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn payload_with_no_rows_is_empty_not_ok() {
        let payload = PriceSeriesPayload {
            dates: vec![],
            prices: vec![],
        };
        assert_eq!(payload.into_series(), Err(FetchError::Empty));
        assert_eq!(non_empty::<u8>(vec![]), Err(FetchError::Empty));
    }
}
