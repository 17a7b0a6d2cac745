use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::engine::PredictionEngine;
use crate::error::PredictionError;
use crate::prediction::AnalysisResult;
use crate::stats::parse_match_stats;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// What the surrounding server sends back: a status and a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(result: &AnalysisResult) -> Self {
        match serde_json::to_value(result) {
            Ok(body) => Self {
                status: STATUS_OK,
                body,
            },
            Err(err) => Self {
                status: STATUS_INTERNAL_ERROR,
                body: json!({ "error": format!("failed to serialize predictions: {err}") }),
            },
        }
    }

    pub fn error(err: &PredictionError) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            body: json!({ "error": err.to_string() }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

pub fn predict_from_value(
    engine: PredictionEngine,
    body: &Value,
) -> Result<AnalysisResult, PredictionError> {
    let stats = parse_match_stats(body)?;
    engine.compute_predictions(&stats)
}

pub fn predict_from_json(
    engine: PredictionEngine,
    raw: &str,
) -> Result<AnalysisResult, PredictionError> {
    let body: Value = serde_json::from_str(raw.trim())?;
    predict_from_value(engine, &body)
}

pub fn handle_predict_value(engine: PredictionEngine, body: &Value) -> ApiResponse {
    respond(engine, predict_from_value(engine, body))
}

/// Entry point for a raw request body. Never returns a partial result.
pub fn handle_predict(engine: PredictionEngine, raw: &str) -> ApiResponse {
    respond(engine, predict_from_json(engine, raw))
}

fn respond(engine: PredictionEngine, outcome: Result<AnalysisResult, PredictionError>) -> ApiResponse {
    match outcome {
        Ok(result) => {
            debug!(engine = engine.name(), categories = result.len(), "prediction served");
            ApiResponse::ok(&result)
        }
        Err(err) => {
            warn!(engine = engine.name(), "prediction rejected: {err}");
            ApiResponse::error(&err)
        }
    }
}
