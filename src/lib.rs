//! Match outcome predictions from two teams' per-game statistics.
//!
//! Two engines share one contract: hand them a `MatchStats` and get back an
//! ordered set of predictions, each with an outcome, a confidence in
//! `[45, 95]` and a short justification.

pub mod api;
pub mod config;
pub mod confidence;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod prediction;
pub mod rating;
pub mod score;
pub mod stats;

pub use api::{ApiResponse, handle_predict};
pub use engine::{PredictionEngine, compute_predictions};
pub use error::PredictionError;
pub use prediction::{AnalysisResult, Category, Prediction};
pub use stats::{MatchStats, Side, TeamStats};
