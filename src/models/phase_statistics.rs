//! Per-phase distribution of a review collection.
use super::Phase;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseCount {
    pub count: usize,
    /// Share of the total, rounded to one decimal place.
    pub percentage: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseStatistics {
    pub learned: PhaseCount,
    pub phase1: PhaseCount,
    pub phase2: PhaseCount,
    pub phase3: PhaseCount,
    pub phase4: PhaseCount,
    pub phase5: PhaseCount,
    pub phase6: PhaseCount,
    pub total: usize,
}

impl PhaseStatistics {
    pub fn get(&self, phase: Phase) -> &PhaseCount {
        match phase {
            Phase::Learned => &self.learned,
            Phase::New => &self.phase1,
            Phase::Learning => &self.phase2,
            Phase::Familiar => &self.phase3,
            Phase::Known => &self.phase4,
            Phase::Mastered => &self.phase5,
            Phase::Expert => &self.phase6,
        }
    }

    fn get_mut(&mut self, phase: Phase) -> &mut PhaseCount {
        match phase {
            Phase::Learned => &mut self.learned,
            Phase::New => &mut self.phase1,
            Phase::Learning => &mut self.phase2,
            Phase::Familiar => &mut self.phase3,
            Phase::Known => &mut self.phase4,
            Phase::Mastered => &mut self.phase5,
            Phase::Expert => &mut self.phase6,
        }
    }

    pub(crate) fn record(&mut self, phase: Phase) {
        self.get_mut(phase).count += 1;
    }

    /// Recomputes every percentage from the counts. No-op on an empty total.
    pub(crate) fn finalize(&mut self) {
        if self.total == 0 {
            return;
        }
        let total = self.total as f64;
        for phase in Phase::ALL {
            let entry = self.get_mut(phase);
            entry.percentage = round_one_decimal(entry.count as f64 / total * 100.0);
        }
    }

    /// Combines tallies of two disjoint review batches.
    pub fn merge(mut self, other: PhaseStatistics) -> PhaseStatistics {
        for phase in Phase::ALL {
            self.get_mut(phase).count += other.get(phase).count;
        }
        self.total += other.total;
        self.finalize();
        self
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
