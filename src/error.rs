use std::fmt;

use thiserror::Error;

use crate::stats::Side;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInput),

    #[error("malformed json: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// Where validation failed and why. `team`/`field` are absent when the
/// problem is with the request shape itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput {
    pub team: Option<Side>,
    pub field: Option<&'static str>,
    pub reason: String,
}

impl PredictionError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        PredictionError::InvalidInput(InvalidInput {
            team: None,
            field: None,
            reason: reason.into(),
        })
    }

    pub fn invalid_team(team: Side, reason: impl Into<String>) -> Self {
        PredictionError::InvalidInput(InvalidInput {
            team: Some(team),
            field: None,
            reason: reason.into(),
        })
    }

    pub fn invalid_field(team: Side, field: &'static str, reason: impl Into<String>) -> Self {
        PredictionError::InvalidInput(InvalidInput {
            team: Some(team),
            field: Some(field),
            reason: reason.into(),
        })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PredictionError::InvalidInput(_))
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.team, self.field) {
            (Some(team), Some(field)) => write!(f, "{team}.{field} {}", self.reason),
            (Some(team), None) => write!(f, "{team} {}", self.reason),
            _ => f.write_str(&self.reason),
        }
    }
}
