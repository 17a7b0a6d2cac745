use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MatchWinner,
    CorrectScore,
    Btts,
    Corners,
    Fouls,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::MatchWinner => "matchWinner",
            Category::CorrectScore => "correctScore",
            Category::Btts => "btts",
            Category::Corners => "corners",
            Category::Fouls => "fouls",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A prediction whose confidence has not been normalized yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    pub outcome: String,
    pub confidence: f64,
    pub analysis: String,
}

impl RawPrediction {
    pub fn new(outcome: impl Into<String>, confidence: f64, analysis: impl Into<String>) -> Self {
        Self {
            outcome: outcome.into(),
            confidence,
            analysis: analysis.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub outcome: String,
    pub confidence: u8,
    pub analysis: String,
}

/// Predictions keyed by category, kept in the order they were computed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisResult {
    entries: Vec<(Category, Prediction)>,
}

impl AnalysisResult {
    pub(crate) fn from_entries(entries: Vec<(Category, Prediction)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, category: Category) -> Option<&Prediction> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, p)| p)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &Prediction)> {
        self.entries.iter().map(|(c, p)| (*c, p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, prediction) in &self.entries {
            map.serialize_entry(category.key(), prediction)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(outcome: &str, confidence: u8) -> Prediction {
        Prediction {
            outcome: outcome.to_string(),
            confidence,
            analysis: "because".to_string(),
        }
    }

    #[test]
    fn serializes_in_insertion_order() {
        let result = AnalysisResult::from_entries(vec![
            (Category::CorrectScore, prediction("1 - 0", 60)),
            (Category::MatchWinner, prediction("Team A to Win", 70)),
        ]);
        let json = serde_json::to_string(&result).unwrap();
        let score_at = json.find("correctScore").unwrap();
        let winner_at = json.find("matchWinner").unwrap();
        assert!(score_at < winner_at);
        assert!(json.contains(r#""confidence":70"#));
    }

    #[test]
    fn lookup_by_category() {
        let result = AnalysisResult::from_entries(vec![(Category::Btts, prediction("Yes", 80))]);
        assert_eq!(result.get(Category::Btts).unwrap().outcome, "Yes");
        assert!(result.get(Category::Fouls).is_none());
        assert_eq!(result.categories().collect::<Vec<_>>(), vec![Category::Btts]);
        assert_eq!(result.len(), 1);
    }
}
