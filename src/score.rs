use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::rating::Rating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scoreline {
    pub a: u32,
    pub b: u32,
}

impl Scoreline {
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    pub fn is_draw(&self) -> bool {
        self.a == self.b
    }

    pub fn both_score(&self) -> bool {
        self.a > 0 && self.b > 0
    }
}

impl fmt::Display for Scoreline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.a, self.b)
    }
}

impl FromStr for Scoreline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once('-')
            .ok_or_else(|| format!("scoreline without separator: {s:?}"))?;
        let a = a.trim().parse::<u32>().map_err(|e| format!("{s:?}: {e}"))?;
        let b = b.trim().parse::<u32>().map_err(|e| format!("{s:?}: {e}"))?;
        Ok(Self { a, b })
    }
}

/// Expected goals = own attack / `attack` - opponent defense / `opponent_defense`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreDivisors {
    pub attack: f64,
    pub opponent_defense: f64,
}

impl ScoreDivisors {
    pub const CONSISTENT: ScoreDivisors = ScoreDivisors {
        attack: 2.2,
        opponent_defense: 4.0,
    };

    pub const HEURISTIC: ScoreDivisors = ScoreDivisors {
        attack: 2.5,
        opponent_defense: 5.0,
    };
}

const DRAW_CORRECTION_MAX_DIFF: f64 = 1.0;
const DRAW_CORRECTION_MIN_ATTACK: f64 = 3.0;

pub fn project_goals(attack: f64, opponent_defense: f64, d: ScoreDivisors) -> u32 {
    // Non-negative before rounding, so half rounds up.
    let expected = (attack / d.attack - opponent_defense / d.opponent_defense).max(0.0);
    expected.round() as u32
}

pub fn project_scoreline(a: &Rating, b: &Rating, d: ScoreDivisors) -> Scoreline {
    Scoreline {
        a: project_goals(a.attack, b.defense, d),
        b: project_goals(b.attack, a.defense, d),
    }
}

/// Lifts a projected 0-0 to 1-1 when the sides are close and at least one
/// of them carries a real attacking threat. Any other scoreline passes through.
pub fn apply_draw_correction(
    score: Scoreline,
    strength_difference: f64,
    attack_a: f64,
    attack_b: f64,
) -> Scoreline {
    let close = strength_difference.abs() < DRAW_CORRECTION_MAX_DIFF;
    let goalless = score.a == 0 && score.b == 0;
    let threat = attack_a > DRAW_CORRECTION_MIN_ATTACK || attack_b > DRAW_CORRECTION_MIN_ATTACK;
    if close && goalless && threat {
        debug!(strength_difference, attack_a, attack_b, "draw correction lifted 0-0 to 1-1");
        Scoreline::new(1, 1)
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(attack: f64, defense: f64) -> Rating {
        Rating {
            attack,
            defense,
            control: None,
        }
    }

    #[test]
    fn scoreline_formats_and_parses() {
        let s = Scoreline::new(2, 1);
        assert_eq!(s.to_string(), "2 - 1");
        assert_eq!("2 - 1".parse::<Scoreline>().unwrap(), s);
        assert_eq!("0-0".parse::<Scoreline>().unwrap(), Scoreline::new(0, 0));
        assert!("two - one".parse::<Scoreline>().is_err());
        assert!("3".parse::<Scoreline>().is_err());
    }

    #[test]
    fn goals_floor_at_zero() {
        assert_eq!(project_goals(1.0, 40.0, ScoreDivisors::CONSISTENT), 0);
        assert_eq!(project_goals(-5.0, 0.0, ScoreDivisors::HEURISTIC), 0);
    }

    #[test]
    fn half_goals_round_up() {
        assert_eq!(project_goals(0.0, -10.0, ScoreDivisors::CONSISTENT), 3);
        assert_eq!(project_goals(3.75, 0.0, ScoreDivisors::HEURISTIC), 2);
    }

    #[test]
    fn scoreline_uses_opponent_defense() {
        let a = rating(6.6, 2.0);
        let b = rating(2.2, 8.0);
        // a: 3.0 - 2.0 = 1.0, b: 1.0 - 0.5 = 0.5
        let s = project_scoreline(&a, &b, ScoreDivisors::CONSISTENT);
        assert_eq!(s, Scoreline::new(1, 1));
    }

    #[test]
    fn draw_correction_needs_all_three_conditions() {
        let nil = Scoreline::new(0, 0);
        assert_eq!(apply_draw_correction(nil, 0.5, 3.5, 1.0), Scoreline::new(1, 1));
        assert_eq!(apply_draw_correction(nil, -0.9, 0.0, 3.1), Scoreline::new(1, 1));

        // Too far apart.
        assert_eq!(apply_draw_correction(nil, 1.0, 3.5, 3.5), nil);
        // Nobody attacks.
        assert_eq!(apply_draw_correction(nil, 0.0, 3.0, 2.0), nil);
        // Already scoring.
        let s = Scoreline::new(1, 0);
        assert_eq!(apply_draw_correction(s, 0.0, 5.0, 5.0), s);
    }
}
