use itertools::Itertools;

use crate::domain::DateRange;
use crate::models::MarketEvent;

/// Sentinel category meaning "do not filter by type".
pub const EVENT_TYPE_ALL: &str = "All";

/// The two user-adjustable event filters, applied together (AND).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    pub date_range: DateRange,
    pub event_type: String,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            date_range: DateRange::default(),
            event_type: EVENT_TYPE_ALL.to_owned(),
        }
    }
}

impl EventFilter {
    pub fn matches(&self, event: &MarketEvent) -> bool {
        if !self.date_range.contains(&event.date) {
            return false;
        }
        self.event_type == EVENT_TYPE_ALL || self.event_type == event.event_type
    }

    /// Filter without reordering, so the list keeps the upstream ordering.
    pub fn apply<'a>(&self, events: &'a [MarketEvent]) -> Vec<&'a MarketEvent> {
        events.iter().filter(|event| self.matches(event)).collect()
    }
}

/// Dropdown options: the "All" sentinel first, then every distinct type
/// in order of first appearance.
pub fn event_type_options(events: &[MarketEvent]) -> Vec<String> {
    std::iter::once(EVENT_TYPE_ALL)
        .chain(events.iter().map(|event| event.event_type.as_str()).unique())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: &str, description: &str, event_type: &str) -> MarketEvent {
        MarketEvent {
            date: date.into(),
            description: description.into(),
            event_type: event_type.into(),
        }
    }

    fn sample_events() -> Vec<MarketEvent> {
        vec![
            event("2014-11-28", "OPEC declines to cut production", "OPEC Policy"),
            event("2016-01-29", "Sanctions lifted on Iran", "Sanctions"),
            event("2020-03-31", "COVID-19 lockdowns spread worldwide", "Pandemic"),
            event("2020-04-30", "OPEC+ agrees record output cut", "OPEC Policy"),
            event("2022-02-28", "Russia invades Ukraine", "Conflict"),
        ]
    }

    #[test]
    fn default_filter_passes_everything() {
        let events = sample_events();
        let filtered = EventFilter::default().apply(&events);
        assert_eq!(filtered.len(), events.len());
    }

    #[test]
    fn range_and_type_apply_together() {
        let events = sample_events();
        let filter = EventFilter {
            date_range: DateRange::full("2015-01-01", "2021-12-31"),
            event_type: "OPEC Policy".into(),
        };
        let filtered = filter.apply(&events);
        // The 2014 OPEC row is outside the range, the pandemic rows are the
        // wrong type; only the 2020 OPEC row satisfies both.
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, "2020-04-30");
    }

    #[test]
    fn filtering_preserves_upstream_order() {
        let events = sample_events();
        let filter = EventFilter {
            date_range: DateRange::default(),
            event_type: "OPEC Policy".into(),
        };
        let dates: Vec<&str> = filter.apply(&events).iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2014-11-28", "2020-04-30"]);
    }

    #[test]
    fn type_options_keep_first_appearance_order() {
        let options = event_type_options(&sample_events());
        assert_eq!(
            options,
            vec!["All", "OPEC Policy", "Sanctions", "Pandemic", "Conflict"]
        );
    }

    #[test]
    fn type_options_for_no_events_is_just_the_sentinel() {
        assert_eq!(event_type_options(&[]), vec!["All"]);
    }
}
