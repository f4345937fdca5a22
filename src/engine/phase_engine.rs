//! Phase progression on top of an SM-2 style scheduler.
//!
//! The scheduler owns the ease factor and repetition count; this engine only
//! reads them:
//! - A review graded below the passing quality moves the item back one phase,
//!   never below phase 1
//! - A passing review re-derives the phase from the new EF, advancing at most
//!   one phase per review, except the jump from Expert to Learned
//! - Learned requires EF >= 3.0 and, by default, five successful repetitions
//! - Learned items are due for maintenance after 90, 120 or 180 days,
//!   depending on EF

use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{Phase, PhaseStatistics, ReviewOutcome, ReviewState, phase_details};
use chrono::{DateTime, Duration, Utc};

/// Interval multipliers indexed by phase ordinal.
pub static INTERVAL_MULTIPLIERS: [f64; 7] = [3.0, 0.8, 0.9, 1.0, 1.2, 1.5, 2.0];

/// Multiplier for ordinals outside `0..=6`.
pub const DEFAULT_INTERVAL_MULTIPLIER: f64 = 0.8;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Stateless phase calculator. Holds only immutable tunables, so one value
/// can be shared freely across threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseEngine {
    config: EngineConfig,
}

impl PhaseEngine {
    pub const DEFAULT: PhaseEngine = PhaseEngine {
        config: EngineConfig::DEFAULT,
    };

    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn clamp_ease(&self, ease_factor: f64) -> f64 {
        ease_factor.max(self.config.min_ease_factor)
    }

    /// Maps an ease factor and repetition count to a phase.
    pub fn classify(&self, ease_factor: f64, repetitions: u32) -> Phase {
        let ef = self.clamp_ease(ease_factor);

        if ef >= 3.0 && repetitions >= self.config.learned_min_repetitions {
            return Phase::Learned;
        }

        if ef < 2.0 {
            Phase::New
        } else if ef < 2.2 {
            Phase::Learning
        } else if ef < 2.4 {
            Phase::Familiar
        } else if ef < 2.6 {
            Phase::Known
        } else if ef < 2.8 {
            Phase::Mastered
        } else {
            // EF >= 3.0 without enough repetitions stays in Expert
            Phase::Expert
        }
    }

    /// Computes the phase after a review.
    ///
    /// Failures regress one ordinal step regardless of EF. Successes move
    /// toward the EF-implied phase, capped at one step forward; downward
    /// corrections apply in full. Comparison is by ordinal, so a target of
    /// `Learned` is never capped.
    pub fn transition(
        &self,
        current: Phase,
        quality: u8,
        new_ease_factor: f64,
        repetitions: u32,
    ) -> Phase {
        let next = if quality < self.config.passing_quality {
            current.down()
        } else {
            let target = self.classify(new_ease_factor, repetitions);
            if target == Phase::Learned && current == Phase::Expert {
                Phase::Learned
            } else if target > current {
                let step = current.ordinal() as i64 + 1;
                Phase::from_ordinal(step).map_or(target, |step| target.min(step))
            } else {
                target
            }
        };

        tracing::debug!(
            from = current.ordinal(),
            to = next.ordinal(),
            quality,
            ease_factor = new_ease_factor,
            repetitions,
            "phase transition"
        );
        next
    }

    /// Whether the item meets the bar for the next phase.
    pub fn can_advance(&self, current: Phase, repetitions: u32, ease_factor: f64) -> bool {
        match current {
            Phase::Learned => false,
            Phase::New if repetitions < self.config.min_reviews_to_advance => false,
            _ => ease_factor >= phase_details(current.ordinal() as i64 + 1).min_ease_factor,
        }
    }

    /// Percentage (0-100) of the way through the phase's EF band.
    pub fn progress_within_phase(&self, phase: Phase, ease_factor: f64) -> f64 {
        if phase.is_learned() {
            return 100.0;
        }

        let details = phase.threshold();
        let range = details.max_ease_factor - details.min_ease_factor;
        if range == 0.0 || !range.is_finite() {
            return 0.0;
        }

        let progress = (ease_factor - details.min_ease_factor) / range;
        (progress * 100.0).clamp(0.0, 100.0)
    }

    pub fn interval_multiplier(&self, phase: Phase) -> f64 {
        INTERVAL_MULTIPLIERS[phase as usize]
    }

    /// Days a learned item with this EF may go without review.
    pub fn maintenance_interval_days(&self, ease_factor: f64) -> u32 {
        self.config.maintenance.interval_days(ease_factor)
    }

    pub fn needs_maintenance_review(
        &self,
        last_review_date: Option<DateTime<Utc>>,
        ease_factor: f64,
    ) -> bool {
        self.needs_maintenance_review_at(last_review_date, ease_factor, Utc::now())
    }

    /// Same as [`Self::needs_maintenance_review`] against an explicit clock.
    pub fn needs_maintenance_review_at(
        &self,
        last_review_date: Option<DateTime<Utc>>,
        ease_factor: f64,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(last_review) = last_review_date else {
            return true;
        };

        let elapsed_days = (now - last_review).num_milliseconds() as f64 / MILLIS_PER_DAY;
        elapsed_days >= self.maintenance_interval_days(ease_factor) as f64
    }

    /// When the next maintenance review falls due.
    pub fn maintenance_due(
        &self,
        last_review_date: DateTime<Utc>,
        ease_factor: f64,
    ) -> DateTime<Utc> {
        last_review_date + Duration::days(self.maintenance_interval_days(ease_factor) as i64)
    }

    /// Runs a review through the engine without touching any state.
    pub fn evaluate_review(
        &self,
        current: Phase,
        quality: u8,
        new_ease_factor: f64,
        repetitions: u32,
        reviewed_at: DateTime<Utc>,
    ) -> ReviewOutcome {
        let ef = self.clamp_ease(new_ease_factor);
        let phase = self.transition(current, quality, ef, repetitions);

        ReviewOutcome {
            previous_phase: current,
            phase,
            progress: self.progress_within_phase(phase, ef),
            interval_multiplier: self.interval_multiplier(phase),
            maintenance_due: phase
                .is_learned()
                .then(|| self.maintenance_due(reviewed_at, ef)),
        }
    }

    /// Records a review on `state`: EF, repetitions, phase and review date.
    ///
    /// States without a stored phase start from the EF-implied one.
    pub fn apply_review(
        &self,
        state: &mut ReviewState,
        quality: u8,
        new_ease_factor: f64,
        repetitions: u32,
        reviewed_at: DateTime<Utc>,
    ) -> ReviewOutcome {
        let current = self.resolve_phase(state);
        let outcome =
            self.evaluate_review(current, quality, new_ease_factor, repetitions, reviewed_at);

        state.ease_factor = self.clamp_ease(new_ease_factor);
        state.repetitions = repetitions;
        state.phase = Some(outcome.phase);
        state.last_review_date = Some(reviewed_at);

        outcome
    }

    /// Fresh state for an item entering the scheduler.
    pub fn new_review_state(&self) -> ReviewState {
        ReviewState::new().with_ease_factor(self.config.default_ease_factor)
    }

    pub(crate) fn resolve_phase(&self, state: &ReviewState) -> Phase {
        state
            .phase
            .unwrap_or_else(|| self.classify(state.ease_factor, state.repetitions))
    }

    /// Counts reviews per phase.
    pub fn aggregate_statistics(&self, reviews: &[ReviewState]) -> PhaseStatistics {
        let mut stats = PhaseStatistics {
            total: reviews.len(),
            ..PhaseStatistics::default()
        };
        for review in reviews {
            stats.record(self.resolve_phase(review));
        }
        stats.finalize();

        tracing::debug!(
            total = stats.total,
            learned = stats.learned.count,
            "aggregated phase statistics"
        );
        stats
    }
}

impl Default for PhaseEngine {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Multiplier for any ordinal; unknown ordinals get the phase-1 value.
pub fn interval_multiplier(phase: i64) -> f64 {
    match Phase::from_ordinal(phase) {
        Some(known) => INTERVAL_MULTIPLIERS[known as usize],
        None => {
            tracing::trace!(phase, "unknown phase ordinal, using default multiplier");
            DEFAULT_INTERVAL_MULTIPLIER
        }
    }
}
