//! Per-item scheduling state owned by the caller.
//!
//! Created when an item first enters the scheduler and updated after every
//! review by [`crate::PhaseEngine::apply_review`].

use super::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_ease_factor() -> f64 {
    crate::EngineConfig::DEFAULT.default_ease_factor
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f64,
    #[serde(default)]
    pub repetitions: u32,
    /// Absent on records that predate phase tracking; derived from EF then.
    #[serde(default)]
    pub phase: Option<Phase>,
    /// Stored as epoch milliseconds.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_review_date: Option<DateTime<Utc>>,
}

impl ReviewState {
    pub fn new() -> Self {
        Self {
            ease_factor: default_ease_factor(),
            repetitions: 0,
            phase: Some(Phase::New),
            last_review_date: None,
        }
    }

    pub fn with_ease_factor(mut self, ease_factor: f64) -> Self {
        self.ease_factor = ease_factor;
        self
    }
}

impl Default for ReviewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_initial_state() {
        let state = ReviewState::new();
        assert_eq!(state.phase, Some(Phase::New));
        assert_eq!(state.repetitions, 0);
        assert_eq!(state.ease_factor, 2.5);
        assert!(state.last_review_date.is_none());
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let state: ReviewState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.ease_factor, 2.5);
        assert_eq!(state.repetitions, 0);
        assert_eq!(state.phase, None);
        assert_eq!(state.last_review_date, None);
    }

    #[test]
    fn test_deserialize_stored_record() {
        let json = r#"{
  "easeFactor": 2.74,
  "repetitions": 6,
  "phase": 5,
  "lastReviewDate": 1700000000000
}"#;
        let state: ReviewState = serde_json::from_str(json).unwrap();
        assert_eq!(state.phase, Some(Phase::Mastered));
        assert_eq!(state.repetitions, 6);
        assert_eq!(
            state.last_review_date,
            Some(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
        );
    }

    #[test]
    fn test_serialize_field_names() {
        let value = serde_json::to_value(ReviewState::new()).unwrap();
        assert_eq!(value["easeFactor"], 2.5);
        assert_eq!(value["phase"], 1);
        assert!(value["lastReviewDate"].is_null());
    }
}
