use tracing::debug;

use crate::prediction::RawPrediction;
use crate::rating::Rating;
use crate::score::Scoreline;
use crate::stats::Side;

pub const DRAW: &str = "Draw";
pub const BTTS_YES: &str = "Yes";
pub const BTTS_NO: &str = "No";

const CORNERS_CONFIDENCE: f64 = 80.0;
const HEURISTIC_WIN_THRESHOLD: f64 = 1.5;

pub fn win_label(side: Side) -> String {
    format!("{} to Win", side.label())
}

pub fn winner_of(score: Scoreline) -> Option<Side> {
    if score.a > score.b {
        Some(Side::A)
    } else if score.b > score.a {
        Some(Side::B)
    } else {
        None
    }
}

/// Winner read off the projected score, never off the ratings.
pub fn winner_from_score(score: Scoreline, strength_difference: f64) -> RawPrediction {
    let confidence = 65.0 + strength_difference.abs() * 4.0;
    match winner_of(score) {
        Some(side) => RawPrediction::new(
            win_label(side),
            confidence,
            format!(
                "{} comes out ahead in the projected {score}, backed by an attack-versus-defense differential of {:.2}.",
                side.label(),
                strength_difference.abs()
            ),
        ),
        None => RawPrediction::new(
            DRAW,
            confidence,
            format!(
                "The projected scoreline is level; an attack-versus-defense differential of {:.2} does not separate the sides.",
                strength_difference.abs()
            ),
        ),
    }
}

pub fn btts_from_score(score: Scoreline, attack_a: f64, attack_b: f64) -> RawPrediction {
    let attack_sum = attack_a + attack_b;
    if score.both_score() {
        RawPrediction::new(
            BTTS_YES,
            70.0 + attack_sum,
            "Derived directly from the score prediction. Both teams are projected to find the net.",
        )
    } else {
        RawPrediction::new(
            BTTS_NO,
            75.0 - attack_sum,
            "Derived directly from the score prediction. At least one team is expected to keep a clean sheet.",
        )
    }
}

pub fn corners(corners_a: f64, corners_b: f64) -> RawPrediction {
    // Half rounds toward +inf, so -4.5 reads as -4.
    let total = ((corners_a + corners_b) + 0.5).floor() as i64;
    RawPrediction::new(
        format!("{total} Corners"),
        CORNERS_CONFIDENCE,
        "Based on the combined sum of both teams' average corners per game.",
    )
}

/// Ties go to Team B.
pub fn fouls(fouls_a: f64, fouls_b: f64) -> RawPrediction {
    let side = if fouls_a > fouls_b { Side::A } else { Side::B };
    let gap = (fouls_a - fouls_b).abs();
    let analysis = if gap == 0.0 {
        "Both teams commit fouls at the same rate; with nothing to split them the call goes to Team B."
            .to_string()
    } else {
        format!(
            "{} averages {gap:.1} more fouls per game and is expected to be the more aggressive side.",
            side.label()
        )
    };
    RawPrediction::new(
        format!("{} to foul more", side.label()),
        60.0 + gap * 5.0,
        analysis,
    )
}

/// Overall score used by the winner-first model: own attack, less the
/// opponent's defensive rating, plus control.
pub fn overall_score(own: &Rating, opponent: &Rating) -> f64 {
    own.attack - opponent.defense + own.control_or_zero()
}

/// Winner decided from the rating differential alone. Strict comparisons:
/// a difference of exactly 1.5 is still a draw.
pub fn winner_from_ratings(a: &Rating, b: &Rating) -> RawPrediction {
    let overall_a = overall_score(a, b);
    let overall_b = overall_score(b, a);
    let diff = overall_a - overall_b;

    if diff > HEURISTIC_WIN_THRESHOLD {
        debug!(diff, "winner-first model favours team A");
        let (factor, weight) = decisive_factor(a, b);
        RawPrediction::new(
            win_label(Side::A),
            60.0 + diff * 4.0,
            format!(
                "Team A leads on overall rating {overall_a:.2} to {overall_b:.2}, driven mainly by its {factor} ({weight:+.2})."
            ),
        )
    } else if diff < -HEURISTIC_WIN_THRESHOLD {
        debug!(diff, "winner-first model favours team B");
        let (factor, weight) = decisive_factor(b, a);
        RawPrediction::new(
            win_label(Side::B),
            60.0 + diff.abs() * 4.0,
            format!(
                "Team B leads on overall rating {overall_b:.2} to {overall_a:.2}, driven mainly by its {factor} ({weight:+.2})."
            ),
        )
    } else {
        RawPrediction::new(
            DRAW,
            70.0 - diff.abs() * 5.0,
            format!(
                "Overall ratings of {overall_a:.2} and {overall_b:.2} sit within {HEURISTIC_WIN_THRESHOLD} of each other, so neither attack nor control separates the sides."
            ),
        )
    }
}

// Largest single contribution to `leader`'s overall edge over `trailer`.
fn decisive_factor(leader: &Rating, trailer: &Rating) -> (&'static str, f64) {
    let parts = [
        ("attack rating", leader.attack - trailer.attack),
        ("defensive rating", leader.defense - trailer.defense),
        (
            "control rating",
            leader.control_or_zero() - trailer.control_or_zero(),
        ),
    ];
    parts
        .into_iter()
        .fold(parts[0], |best, p| if p.1 > best.1 { p } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(attack: f64, defense: f64, control: f64) -> Rating {
        Rating {
            attack,
            defense,
            control: Some(control),
        }
    }

    #[test]
    fn winner_follows_score() {
        let p = winner_from_score(Scoreline::new(2, 1), -0.5);
        assert_eq!(p.outcome, "Team A to Win");
        assert_eq!(p.confidence, 67.0);

        let p = winner_from_score(Scoreline::new(0, 3), 2.0);
        assert_eq!(p.outcome, "Team B to Win");

        let p = winner_from_score(Scoreline::new(1, 1), 3.0);
        assert_eq!(p.outcome, "Draw");
        assert_eq!(p.confidence, 77.0);
    }

    #[test]
    fn btts_follows_score() {
        let yes = btts_from_score(Scoreline::new(2, 1), 4.0, 3.0);
        assert_eq!(yes.outcome, "Yes");
        assert_eq!(yes.confidence, 77.0);

        let no = btts_from_score(Scoreline::new(2, 0), 4.0, 3.0);
        assert_eq!(no.outcome, "No");
        assert_eq!(no.confidence, 68.0);
        assert!(no.analysis.contains("clean sheet"));
    }

    #[test]
    fn corners_sum_and_round() {
        let p = corners(5.0, 7.0);
        assert_eq!(p.outcome, "12 Corners");
        assert_eq!(p.confidence, 80.0);
        assert_eq!(corners(4.6, 5.1).outcome, "10 Corners");
        assert_eq!(corners(2.0, 2.5).outcome, "5 Corners");
    }

    #[test]
    fn negative_corner_halves_round_up() {
        assert_eq!(corners(-2.0, -2.5).outcome, "-4 Corners");
        assert_eq!(corners(-0.25, -0.25).outcome, "0 Corners");
        assert_eq!(corners(-3.0, -2.6).outcome, "-6 Corners");
    }

    #[test]
    fn fouls_tie_goes_to_team_b() {
        let p = fouls(11.0, 11.0);
        assert_eq!(p.outcome, "Team B to foul more");
        assert_eq!(p.confidence, 60.0);

        let p = fouls(14.0, 10.0);
        assert_eq!(p.outcome, "Team A to foul more");
        assert_eq!(p.confidence, 80.0);
    }

    #[test]
    fn heuristic_threshold_is_strict() {
        let a = rating(1.5, 0.0, 0.0);
        let b = rating(0.0, 0.0, 0.0);
        let p = winner_from_ratings(&a, &b);
        assert_eq!(p.outcome, "Draw");
        assert_eq!(p.confidence, 62.5);

        let p = winner_from_ratings(&b, &a);
        assert_eq!(p.outcome, "Draw");
    }

    #[test]
    fn heuristic_names_the_driving_rating() {
        let a = rating(1.0, 1.0, 3.0);
        let b = rating(1.0, 1.0, 0.0);
        let p = winner_from_ratings(&a, &b);
        assert_eq!(p.outcome, "Team A to Win");
        assert_eq!(p.confidence, 72.0);
        assert!(p.analysis.contains("control rating"));

        let a = rating(0.5, 0.0, 0.0);
        let b = rating(4.5, 0.0, 0.0);
        let p = winner_from_ratings(&a, &b);
        assert_eq!(p.outcome, "Team B to Win");
        assert_eq!(p.confidence, 76.0);
        assert!(p.analysis.contains("attack rating"));
    }
}
