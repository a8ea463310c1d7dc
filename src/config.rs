use crate::grammar::{
    registry::check_word, MatchEngine, PatternRegistry, RegistryError, SuppressionPolicy,
    EXTRA_APOSTROPHE_PREPOSITIONS, FORGOTTEN_APOSTROPHE_WORDS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
    #[error("Invalid word list: {0}")]
    WordList(#[from] RegistryError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum age of a comment before it is considered for a reply.
    pub delay_seconds: u64,
    /// Author name the bot posts under; its own comments are never flagged.
    pub bot_identity: String,
    /// Words that follow a bare "its" by mistake.
    pub forgotten_apostrophe_words: Vec<String>,
    /// Prepositions that precede "it's" by mistake.
    pub extra_apostrophe_prepositions: Vec<String>,
    /// How long to back off after a reply fails to send.
    pub delivery_pause_seconds: u64,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay_seconds: 360,
            bot_identity: "scalawag_bot".to_string(),
            forgotten_apostrophe_words: FORGOTTEN_APOSTROPHE_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            extra_apostrophe_prepositions: EXTRA_APOSTROPHE_PREPOSITIONS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            delivery_pause_seconds: 120,
            log_filter: "scalawag=info".to_string(),
        }
    }
}

impl Config {
    /// Points at an optional TOML file.
    pub const PATH_VAR: &'static str = "SCALAWAG_CONFIG";
    pub const DELAY_VAR: &'static str = "SCALAWAG_DELAY_SECONDS";
    pub const IDENTITY_VAR: &'static str = "SCALAWAG_BOT_IDENTITY";

    /// Defaults, then the file named by `SCALAWAG_CONFIG` if any, then
    /// environment overrides. The result is validated.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(Self::PATH_VAR) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies overrides from `lookup`, normally the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(Self::DELAY_VAR) {
            self.delay_seconds =
                raw.trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                        key: Self::DELAY_VAR,
                        reason: e.to_string(),
                    })?;
        }
        if let Some(identity) = lookup(Self::IDENTITY_VAR) {
            self.bot_identity = identity.trim().to_string();
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_identity.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "bot_identity",
                reason: "must not be empty".to_string(),
            });
        }

        for (key, words) in [
            ("forgotten_apostrophe_words", &self.forgotten_apostrophe_words),
            ("extra_apostrophe_prepositions", &self.extra_apostrophe_prepositions),
        ] {
            if words.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: "must list at least one word".to_string(),
                });
            }
            for word in words {
                check_word(word)?;
            }
        }

        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }

    pub fn delivery_pause(&self) -> Duration {
        Duration::from_secs(self.delivery_pause_seconds)
    }

    /// Match engine over the configured word lists and bot identity.
    pub fn build_engine(&self) -> Result<MatchEngine, ConfigError> {
        let registry = PatternRegistry::from_word_lists(
            &self.forgotten_apostrophe_words,
            &self.extra_apostrophe_prepositions,
        )?;
        Ok(MatchEngine::new(
            registry,
            SuppressionPolicy::new(self.bot_identity.clone()),
        ))
    }
}
