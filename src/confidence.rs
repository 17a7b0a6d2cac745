use crate::prediction::{AnalysisResult, Category, Prediction, RawPrediction};

pub const MIN_CONFIDENCE: u8 = 45;
pub const MAX_CONFIDENCE: u8 = 95;

pub fn normalize_confidence(raw: f64) -> u8 {
    if raw.is_nan() {
        return MIN_CONFIDENCE;
    }
    raw.clamp(MIN_CONFIDENCE as f64, MAX_CONFIDENCE as f64).round() as u8
}

/// Final pass over a fully computed set of predictions. Consumes the raw
/// entries and hands back an immutable result.
pub fn finalize(raw: Vec<(Category, RawPrediction)>) -> AnalysisResult {
    let entries = raw
        .into_iter()
        .map(|(category, p)| {
            let prediction = Prediction {
                outcome: p.outcome,
                confidence: normalize_confidence(p.confidence),
                analysis: p.analysis,
            };
            (category, prediction)
        })
        .collect();
    AnalysisResult::from_entries(entries)
}

/// Runs the normalizer again over an already finished result.
pub fn renormalize(result: &AnalysisResult) -> AnalysisResult {
    let entries = result
        .iter()
        .map(|(category, p)| {
            let prediction = Prediction {
                confidence: normalize_confidence(p.confidence as f64),
                ..p.clone()
            };
            (category, prediction)
        })
        .collect();
    AnalysisResult::from_entries(entries)
}
