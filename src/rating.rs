use crate::stats::TeamStats;

/// Linear weights turning raw per-game stats into ratings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingWeights {
    pub goals: f64,
    pub shots_on_target: f64,
    pub possession: f64,
    pub conceded: f64,
    pub fouls: f64,
    // Adds the centred possession term as a separate `control` rating.
    pub with_control: bool,
}

impl RatingWeights {
    /// Possession folded straight into attack.
    pub const CONSISTENT: RatingWeights = RatingWeights {
        goals: 1.8,
        shots_on_target: 0.25,
        possession: 1.0 / 20.0,
        conceded: 1.8,
        fouls: 0.15,
        with_control: false,
    };

    pub const HEURISTIC: RatingWeights = RatingWeights {
        goals: 1.5,
        shots_on_target: 0.3,
        possession: 0.0,
        conceded: 1.2,
        fouls: 0.1,
        with_control: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    pub attack: f64,
    pub defense: f64,
    pub control: Option<f64>,
}

impl Rating {
    pub fn net(&self) -> f64 {
        self.attack - self.defense
    }

    pub fn control_or_zero(&self) -> f64 {
        self.control.unwrap_or(0.0)
    }
}

pub fn compute_rating(stats: &TeamStats, w: &RatingWeights) -> Rating {
    let attack = stats.goals * w.goals
        + stats.shots_on_target * w.shots_on_target
        + stats.possession * w.possession;
    let defense = stats.conceded * w.conceded + stats.fouls * w.fouls;
    let control = w.with_control.then(|| control_rating(stats.possession));
    Rating {
        attack,
        defense,
        control,
    }
}

/// 50% possession is neutral; every 10 points either way is one unit.
pub fn control_rating(possession: f64) -> f64 {
    (possession - 50.0) / 10.0
}
