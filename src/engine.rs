use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::confidence;
use crate::error::PredictionError;
use crate::outcome;
use crate::prediction::{AnalysisResult, Category, RawPrediction};
use crate::rating::{Rating, RatingWeights, compute_rating};
use crate::score::{ScoreDivisors, Scoreline, apply_draw_correction, project_scoreline};
use crate::stats::MatchStats;

const HEURISTIC_SCORE_CONFIDENCE_SHARE: f64 = 0.7;

/// The two prediction policies. A deployment picks exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PredictionEngine {
    /// Score first; winner and BTTS are read off the scoreline so they
    /// never contradict it.
    #[default]
    Consistent,
    /// Winner first from an overall rating gap including possession
    /// control; the scoreline is projected separately and can disagree
    /// with the winner call.
    Heuristic,
}

impl PredictionEngine {
    pub const ALL: [PredictionEngine; 2] = [PredictionEngine::Consistent, PredictionEngine::Heuristic];

    pub fn name(self) -> &'static str {
        match self {
            PredictionEngine::Consistent => "consistent",
            PredictionEngine::Heuristic => "heuristic",
        }
    }

    pub fn categories(self) -> &'static [Category] {
        match self {
            PredictionEngine::Consistent => &[
                Category::CorrectScore,
                Category::MatchWinner,
                Category::Btts,
                Category::Corners,
                Category::Fouls,
            ],
            PredictionEngine::Heuristic => &[Category::MatchWinner, Category::CorrectScore],
        }
    }

    pub fn compute_predictions(self, stats: &MatchStats) -> Result<AnalysisResult, PredictionError> {
        stats.validate()?;
        let raw = match self {
            PredictionEngine::Consistent => consistent_predictions(stats),
            PredictionEngine::Heuristic => heuristic_predictions(stats),
        };
        debug!(engine = self.name(), predictions = raw.len(), "predictions computed");
        Ok(confidence::finalize(raw))
    }
}

impl fmt::Display for PredictionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredictionEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consistent" | "score-first" => Ok(PredictionEngine::Consistent),
            "heuristic" | "winner-first" => Ok(PredictionEngine::Heuristic),
            other => Err(format!(
                "unknown prediction engine {other:?} (expected \"consistent\" or \"heuristic\")"
            )),
        }
    }
}

pub fn compute_predictions(
    engine: PredictionEngine,
    stats: &MatchStats,
) -> Result<AnalysisResult, PredictionError> {
    engine.compute_predictions(stats)
}

/// Ratings and projected score behind a consistent-engine result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreFirstProjection {
    pub rating_a: Rating,
    pub rating_b: Rating,
    pub strength_difference: f64,
    pub score: Scoreline,
}

pub fn project_score_first(stats: &MatchStats) -> ScoreFirstProjection {
    let rating_a = compute_rating(&stats.team_a, &RatingWeights::CONSISTENT);
    let rating_b = compute_rating(&stats.team_b, &RatingWeights::CONSISTENT);
    let strength_difference = rating_a.net() - rating_b.net();

    let score = project_scoreline(&rating_a, &rating_b, ScoreDivisors::CONSISTENT);
    let score = apply_draw_correction(score, strength_difference, rating_a.attack, rating_b.attack);

    ScoreFirstProjection {
        rating_a,
        rating_b,
        strength_difference,
        score,
    }
}

fn consistent_predictions(stats: &MatchStats) -> Vec<(Category, RawPrediction)> {
    let p = project_score_first(stats);
    let diff = p.strength_difference;

    let correct_score = RawPrediction::new(
        p.score.to_string(),
        60.0 - diff.abs(),
        "Scoreline projected from each team's calculated attack rating versus the opponent's defensive rating.",
    );

    vec![
        (Category::CorrectScore, correct_score),
        (Category::MatchWinner, outcome::winner_from_score(p.score, diff)),
        (
            Category::Btts,
            outcome::btts_from_score(p.score, p.rating_a.attack, p.rating_b.attack),
        ),
        (
            Category::Corners,
            outcome::corners(stats.team_a.corners, stats.team_b.corners),
        ),
        (
            Category::Fouls,
            outcome::fouls(stats.team_a.fouls, stats.team_b.fouls),
        ),
    ]
}

fn heuristic_predictions(stats: &MatchStats) -> Vec<(Category, RawPrediction)> {
    let rating_a = compute_rating(&stats.team_a, &RatingWeights::HEURISTIC);
    let rating_b = compute_rating(&stats.team_b, &RatingWeights::HEURISTIC);

    let winner = outcome::winner_from_ratings(&rating_a, &rating_b);

    // Projected independently of the winner call; the two may disagree.
    let score = project_scoreline(&rating_a, &rating_b, ScoreDivisors::HEURISTIC);
    let correct_score = RawPrediction::new(
        score.to_string(),
        winner.confidence * HEURISTIC_SCORE_CONFIDENCE_SHARE,
        "Goals projected from each side's attack rating against the opponent's defensive rating, independent of the winner call.",
    );

    vec![
        (Category::MatchWinner, winner),
        (Category::CorrectScore, correct_score),
    ]
}
