//! Everything the engine derives from a single review event.
use super::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    pub previous_phase: Phase,
    pub phase: Phase,
    /// Position inside the new phase's EF band, 0-100.
    pub progress: f64,
    pub interval_multiplier: f64,
    /// Next maintenance review for items that reached `Learned`.
    pub maintenance_due: Option<DateTime<Utc>>,
}

impl ReviewOutcome {
    pub fn advanced(&self) -> bool {
        self.phase.mastery_rank() > self.previous_phase.mastery_rank()
    }

    pub fn regressed(&self) -> bool {
        self.phase.mastery_rank() < self.previous_phase.mastery_rank()
    }
}
