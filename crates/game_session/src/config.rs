//! Session settings, read from TOML. Every field has a default, so an empty
//! file is a valid config.
//!
//! ```toml
//! turn_seconds = 600
//! human_side = "a"
//! first_to_move = "a"
//!
//! [search]
//! endpoint = "http://localhost:8080/api/search"
//! depth = 12
//! budget_ms = 3000
//! grace_ms = 2000
//! side_a_label = "w"
//!
//! [fallback]
//! quiet_bias = 0.7
//! ```

use std::path::Path;
use std::time::Duration;

use chess_rules::Side;
use fallback_engine::{FallbackMover, DEFAULT_QUIET_BIAS};
use search_client::{RemoteSearch, SearchAdapter, SideLabel, SideLabels, SourceError};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Time each side has for one move
    pub turn_seconds: u64,
    pub human_side: Side,
    pub first_to_move: Side,
    pub search: SearchConfig,
    pub fallback: FallbackConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Remote search URL; without one only the local mover plays
    pub endpoint: Option<String>,
    pub depth: u8,
    pub budget_ms: u64,
    /// Extra wait on top of the budget before giving up on the service
    pub grace_ms: u64,
    pub side_a_label: SideLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FallbackConfig {
    /// Probability of preferring a non-capture when both kinds exist
    pub quiet_bias: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            turn_seconds: 3600,
            human_side: Side::A,
            first_to_move: Side::A,
            search: SearchConfig::default(),
            fallback: FallbackConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            depth: 12,
            budget_ms: 3000,
            grace_ms: 2000,
            side_a_label: SideLabel::W,
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            quiet_bias: DEFAULT_QUIET_BIAS,
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(txt)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let txt = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&txt)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_seconds == 0 {
            return Err(ConfigError::Invalid("turn_seconds must be positive".into()));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Invalid("search.depth must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.fallback.quiet_bias) {
            return Err(ConfigError::Invalid(format!(
                "fallback.quiet_bias must be within 0..=1, got {}",
                self.fallback.quiet_bias
            )));
        }
        Ok(())
    }

    pub fn turn(&self) -> Duration {
        Duration::from_secs(self.turn_seconds)
    }

    /// Build the engine's move adapter: remote search when an endpoint is
    /// set, the local mover either way.
    pub fn build_adapter(&self) -> Result<SearchAdapter, SourceError> {
        let fallback = Box::new(FallbackMover::new(self.fallback.quiet_bias));
        match &self.search.endpoint {
            Some(endpoint) => {
                let remote = RemoteSearch::new(endpoint.clone(), self.search.depth, self.search.labels())?;
                Ok(SearchAdapter::new(Box::new(remote), fallback, self.search.grace()))
            }
            None => Ok(SearchAdapter::local(fallback)),
        }
    }
}

impl SearchConfig {
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }

    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    pub fn labels(&self) -> SideLabels {
        SideLabels::new(self.side_a_label)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
