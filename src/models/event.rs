use serde::{Deserialize, Serialize};

fn default_event_type() -> String {
    "Event".to_owned()
}

/// One curated market annotation (conflict, OPEC decision, macro shock...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarketEvent {
    /// Date label in the same format as the price series dates.
    pub date: String,
    pub description: String,
    /// Free-form category. The wire field is `type`; rows without one
    /// fall back to the generic "Event".
    #[serde(rename = "type", default = "default_event_type")]
    pub event_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_type_field_under_its_wire_name() {
        let event: MarketEvent = serde_json::from_str(
            r#"{"date": "2022-02-28", "description": "Russia invades Ukraine", "type": "Conflict"}"#,
        )
        .unwrap();
        assert_eq!(event.event_type, "Conflict");
    }

    #[test]
    fn missing_type_falls_back_to_generic_event() {
        let event: MarketEvent =
            serde_json::from_str(r#"{"date": "2016-01-29", "description": "Sanctions lifted on Iran"}"#)
                .unwrap();
        assert_eq!(event.event_type, "Event");
    }

    #[test]
    fn round_trips_through_the_wire_shape() {
        let event = MarketEvent {
            date: "2020-04-30".into(),
            description: "OPEC+ agrees record output cut".into(),
            event_type: "OPEC Policy".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"OPEC Policy""#), "serialized as `type`: {json}");
        let back: MarketEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
