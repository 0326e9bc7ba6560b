//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisReport, analyze_state, parse_observations};
pub use simple::run_simple;
pub use simulate::{GameRecord, SimulationConfig, SimulationStats, play_game, run_simulation};
