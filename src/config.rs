use once_cell::sync::OnceCell;
use tracing::warn;

use crate::engine::PredictionEngine;

pub const ENGINE_ENV: &str = "MATCH_INSIGHT_ENGINE";

static CONFIG: OnceCell<EngineConfig> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub engine: PredictionEngine,
}

impl EngineConfig {
    /// Reads `.env.local` and `.env` (if present) and then the process
    /// environment. Unknown engine names fall back to the default.
    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let engine = match lookup(ENGINE_ENV) {
            Some(raw) if !raw.trim().is_empty() => raw.parse().unwrap_or_else(|err| {
                warn!("{err}; using {}", PredictionEngine::default());
                PredictionEngine::default()
            }),
            _ => PredictionEngine::default(),
        };
        Self { engine }
    }

    pub fn with_engine(mut self, engine: Option<PredictionEngine>) -> Self {
        if let Some(engine) = engine {
            self.engine = engine;
        }
        self
    }
}

/// Process-wide configuration, loaded from the environment on first use.
pub fn engine_config() -> &'static EngineConfig {
    CONFIG.get_or_init(EngineConfig::from_env)
}
