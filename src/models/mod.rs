pub mod phase;
pub mod phase_statistics;
pub mod review_outcome;
pub mod review_state;

pub use phase::{PHASE_THRESHOLDS, Phase, PhaseThreshold, phase_details};
pub use phase_statistics::{PhaseCount, PhaseStatistics};
pub use review_outcome::ReviewOutcome;
pub use review_state::ReviewState;
