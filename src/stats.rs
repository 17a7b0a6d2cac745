use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PredictionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn key(self) -> &'static str {
        match self {
            Side::A => "teamA",
            Side::B => "teamB",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::A => "Team A",
            Side::B => "Team B",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-game averages for one side. `possession` is a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub goals: f64,
    pub shots_on_target: f64,
    pub possession: f64,
    pub conceded: f64,
    pub fouls: f64,
    pub corners: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub team_a: TeamStats,
    pub team_b: TeamStats,
}

const FIELDS: [&str; 6] = [
    "goals",
    "shotsOnTarget",
    "possession",
    "conceded",
    "fouls",
    "corners",
];

impl TeamStats {
    fn field_values(&self) -> [f64; 6] {
        [
            self.goals,
            self.shots_on_target,
            self.possession,
            self.conceded,
            self.fouls,
            self.corners,
        ]
    }

    pub fn validate(&self, side: Side) -> Result<(), PredictionError> {
        for (&field, value) in FIELDS.iter().zip(self.field_values()) {
            if !value.is_finite() {
                return Err(PredictionError::invalid_field(
                    side,
                    field,
                    format!("must be a finite number, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

impl MatchStats {
    pub fn validate(&self) -> Result<(), PredictionError> {
        self.team_a.validate(Side::A)?;
        self.team_b.validate(Side::B)
    }
}

/// Validates a request body field by field and builds `MatchStats`.
/// Nothing downstream runs unless every required number is present.
pub fn parse_match_stats(root: &Value) -> Result<MatchStats, PredictionError> {
    if !root.is_object() {
        return Err(PredictionError::invalid(format!(
            "request body must be a JSON object, got {}",
            kind_of(root)
        )));
    }
    let stats = MatchStats {
        team_a: parse_team_stats(root, Side::A)?,
        team_b: parse_team_stats(root, Side::B)?,
    };
    stats.validate()?;
    Ok(stats)
}

pub fn parse_match_stats_json(raw: &str) -> Result<MatchStats, PredictionError> {
    let root: Value = serde_json::from_str(raw.trim())?;
    parse_match_stats(&root)
}

fn parse_team_stats(root: &Value, side: Side) -> Result<TeamStats, PredictionError> {
    let team = match root.get(side.key()) {
        None | Some(Value::Null) => {
            return Err(PredictionError::invalid_team(side, "is missing"));
        }
        Some(v) if !v.is_object() => {
            return Err(PredictionError::invalid_team(
                side,
                format!("must be an object, got {}", kind_of(v)),
            ));
        }
        Some(v) => v,
    };

    Ok(TeamStats {
        goals: pick_number(team, side, "goals")?,
        shots_on_target: pick_number(team, side, "shotsOnTarget")?,
        possession: pick_number(team, side, "possession")?,
        conceded: pick_number(team, side, "conceded")?,
        fouls: pick_number(team, side, "fouls")?,
        corners: pick_number(team, side, "corners")?,
    })
}

fn pick_number(team: &Value, side: Side, field: &'static str) -> Result<f64, PredictionError> {
    match team.get(field) {
        None | Some(Value::Null) => Err(PredictionError::invalid_field(side, field, "is missing")),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            PredictionError::invalid_field(side, field, "is not representable as a number")
        }),
        Some(other) => Err(PredictionError::invalid_field(
            side,
            field,
            format!("must be a number, got {}", kind_of(other)),
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
