//! Mastery phases and their ease-factor thresholds.
//!
//! Seven phases partition the ease-factor axis into half-open intervals:
//! - Phase 1 (New): EF < 2.0
//! - Phase 2 (Learning): 2.0 <= EF < 2.2
//! - Phase 3 (Familiar): 2.2 <= EF < 2.4
//! - Phase 4 (Known): 2.4 <= EF < 2.6
//! - Phase 5 (Mastered): 2.6 <= EF < 2.8
//! - Phase 6 (Expert): 2.8 <= EF < 3.0
//! - Phase 0 (Learned): EF >= 3.0, only once enough repetitions are recorded
//!
//! Ordinal `0` sorts below `1` for adjacency arithmetic but represents the
//! highest level of mastery.

use crate::error::PhaseError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum Phase {
    Learned = 0,
    New = 1,
    Learning = 2,
    Familiar = 3,
    Known = 4,
    Mastered = 5,
    Expert = 6,
}

impl Phase {
    /// All phases in ordinal order.
    pub const ALL: [Phase; 7] = [
        Phase::Learned,
        Phase::New,
        Phase::Learning,
        Phase::Familiar,
        Phase::Known,
        Phase::Mastered,
        Phase::Expert,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Phase> {
        match ordinal {
            0 => Some(Phase::Learned),
            1 => Some(Phase::New),
            2 => Some(Phase::Learning),
            3 => Some(Phase::Familiar),
            4 => Some(Phase::Known),
            5 => Some(Phase::Mastered),
            6 => Some(Phase::Expert),
            _ => None,
        }
    }

    /// One ordinal step back, never below `New`. `Learned` also lands on `New`.
    pub fn down(self) -> Phase {
        let ordinal = (self.ordinal() as i64 - 1).max(1);
        Phase::from_ordinal(ordinal).unwrap_or(Phase::New)
    }

    /// Position on the mastery scale, where `Learned` ranks above `Expert`.
    pub fn mastery_rank(self) -> u8 {
        match self {
            Phase::Learned => 7,
            other => other.ordinal(),
        }
    }

    pub fn is_learned(self) -> bool {
        self == Phase::Learned
    }

    pub fn threshold(self) -> &'static PhaseThreshold {
        &PHASE_THRESHOLDS[self as usize]
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> u8 {
        phase.ordinal()
    }
}

impl TryFrom<i64> for Phase {
    type Error = PhaseError;

    fn try_from(ordinal: i64) -> Result<Self, Self::Error> {
        Phase::from_ordinal(ordinal).ok_or(PhaseError::UnknownPhase(ordinal))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.threshold().display_name)
    }
}

/// Static ease-factor band for one phase. `max_ease_factor` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseThreshold {
    pub min_ease_factor: f64,
    pub max_ease_factor: f64,
    pub display_name: &'static str,
    pub color: &'static str,
}

impl PhaseThreshold {
    pub fn contains(&self, ease_factor: f64) -> bool {
        ease_factor >= self.min_ease_factor && ease_factor < self.max_ease_factor
    }
}

/// Indexed by phase ordinal.
pub static PHASE_THRESHOLDS: [PhaseThreshold; 7] = [
    PhaseThreshold {
        min_ease_factor: 3.0,
        max_ease_factor: f64::INFINITY,
        display_name: "Learned",
        color: "#06b6d4",
    },
    PhaseThreshold {
        min_ease_factor: 0.0,
        max_ease_factor: 2.0,
        display_name: "New",
        color: "#ef4444",
    },
    PhaseThreshold {
        min_ease_factor: 2.0,
        max_ease_factor: 2.2,
        display_name: "Learning",
        color: "#f97316",
    },
    PhaseThreshold {
        min_ease_factor: 2.2,
        max_ease_factor: 2.4,
        display_name: "Familiar",
        color: "#eab308",
    },
    PhaseThreshold {
        min_ease_factor: 2.4,
        max_ease_factor: 2.6,
        display_name: "Known",
        color: "#84cc16",
    },
    PhaseThreshold {
        min_ease_factor: 2.6,
        max_ease_factor: 2.8,
        display_name: "Mastered",
        color: "#22c55e",
    },
    PhaseThreshold {
        min_ease_factor: 2.8,
        max_ease_factor: 3.0,
        display_name: "Expert",
        color: "#10b981",
    },
];

/// Threshold record for any ordinal.
///
/// Ordinals outside `0..=6` (negative included) resolve to the phase-1
/// record. This is defined behavior, not an error.
pub fn phase_details(phase: i64) -> &'static PhaseThreshold {
    match Phase::from_ordinal(phase) {
        Some(known) => known.threshold(),
        None => {
            tracing::trace!(phase, "unknown phase ordinal, using phase 1 threshold");
            Phase::New.threshold()
        }
    }
}
