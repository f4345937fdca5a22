pub mod config;
pub mod engine;
pub mod error;
pub mod localization;
pub mod models;

pub use config::{EngineConfig, MaintenanceConfig};
pub use engine::{
    PhaseEngine, aggregate_statistics, can_advance, classify, interval_multiplier,
    needs_maintenance_review, progress_within_phase, transition,
};
pub use error::{PhaseError, Result};
pub use localization::{Language, phase_icon, phase_label, phase_name};
pub use models::{
    Phase, PhaseCount, PhaseStatistics, PhaseThreshold, ReviewOutcome, ReviewState,
    phase_details,
};
