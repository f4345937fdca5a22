//! Free-function surface over [`PhaseEngine::DEFAULT`].
pub mod phase_engine;

pub use phase_engine::{
    DEFAULT_INTERVAL_MULTIPLIER, INTERVAL_MULTIPLIERS, PhaseEngine, interval_multiplier,
};

use crate::models::{Phase, PhaseStatistics, ReviewState};
use chrono::{DateTime, Utc};

pub fn classify(ease_factor: f64, repetitions: u32) -> Phase {
    PhaseEngine::DEFAULT.classify(ease_factor, repetitions)
}

pub fn transition(current: Phase, quality: u8, new_ease_factor: f64, repetitions: u32) -> Phase {
    PhaseEngine::DEFAULT.transition(current, quality, new_ease_factor, repetitions)
}

pub fn can_advance(current: Phase, repetitions: u32, ease_factor: f64) -> bool {
    PhaseEngine::DEFAULT.can_advance(current, repetitions, ease_factor)
}

pub fn progress_within_phase(phase: Phase, ease_factor: f64) -> f64 {
    PhaseEngine::DEFAULT.progress_within_phase(phase, ease_factor)
}

pub fn needs_maintenance_review(last_review_date: Option<DateTime<Utc>>, ease_factor: f64) -> bool {
    PhaseEngine::DEFAULT.needs_maintenance_review(last_review_date, ease_factor)
}

pub fn aggregate_statistics(reviews: &[ReviewState]) -> PhaseStatistics {
    PhaseEngine::DEFAULT.aggregate_statistics(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_use_defaults() {
        assert_eq!(classify(3.1, 5), Phase::Learned);
        assert_eq!(transition(Phase::Familiar, 4, 2.55, 4), Phase::Known);
        assert_eq!(transition(Phase::Expert, 4, 3.2, 6), Phase::Learned);
        assert_eq!(transition(Phase::Known, 2, 2.9, 4), Phase::Familiar);
        assert!(!can_advance(Phase::New, 2, 2.1));
        assert_eq!(progress_within_phase(Phase::Learned, 2.0), 100.0);
        assert!(needs_maintenance_review(None, 3.6));
        assert_eq!(aggregate_statistics(&[]).total, 0);
    }

    #[test]
    fn test_expert_can_always_advance() {
        assert!(can_advance(Phase::Expert, 0, 1.3));
    }
}
