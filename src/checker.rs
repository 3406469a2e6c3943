use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{CheckError, Error};
use crate::puzzle::PuzzleFields;
use crate::time::{SystemTimeProvider, TimeProvider};
use crate::timestamp::{parse_utc, ValidityWindow};
use crate::work::{meets_difficulty, puzzle_digest, DIGEST_LEN};

/// Configuration for a [`Checker`].
///
/// Nothing here is validated on construction; see [`CheckerConfig::validate`]
/// for an opt-in sanity check.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(pattern = "owned")]
pub struct CheckerConfig {
    /// Required number of leading zero bytes in the SHA-1 digest.
    pub difficulty: u8,
    /// strftime-style layout of the timestamp field, read as UTC.
    #[builder(setter(into))]
    pub date_format: String,
    /// Total accepted span, centered on the current instant.
    pub validity_window: Duration,
}

impl CheckerConfig {
    pub fn new(difficulty: u8, date_format: impl Into<String>, validity_window: Duration) -> Self {
        Self {
            difficulty,
            date_format: date_format.into(),
            validity_window,
        }
    }

    /// Load a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Report settings under which no puzzle can ever be accepted.
    pub fn validate(&self) -> Result<(), Error> {
        if usize::from(self.difficulty) > DIGEST_LEN {
            return Err(Error::InvalidConfig(format!(
                "difficulty must be <= {DIGEST_LEN} bytes"
            )));
        }
        if self.date_format.is_empty() {
            return Err(Error::InvalidConfig("date_format must not be empty".into()));
        }
        // The token is split on ':' before the timestamp is parsed.
        if self.date_format.contains(':') {
            return Err(Error::InvalidConfig(
                "date_format must not render ':'".into(),
            ));
        }
        if self.validity_window.is_zero() {
            return Err(Error::InvalidConfig(
                "validity_window must be > 0".into(),
            ));
        }
        Ok(())
    }
}

impl CheckerConfigBuilder {
    pub fn build_validated(self) -> Result<CheckerConfig, Error> {
        let config = self
            .build()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Stateless hashcash puzzle checker.
///
/// Immutable once built and safe to share across threads. There is no replay
/// protection: the same puzzle is accepted for as long as its timestamp stays
/// inside the validity window.
#[derive(Debug, Clone)]
pub struct Checker<T: TimeProvider = SystemTimeProvider> {
    config: CheckerConfig,
    window: ValidityWindow,
    time_provider: T,
}

impl Checker<SystemTimeProvider> {
    /// Creates a checker reading the system clock.
    pub fn new(difficulty: u8, date_format: impl Into<String>, validity_window: Duration) -> Self {
        Self::from_config(CheckerConfig::new(difficulty, date_format, validity_window))
    }

    pub fn from_config(config: CheckerConfig) -> Self {
        Self::with_time_provider(config, SystemTimeProvider)
    }
}

impl<T: TimeProvider> Checker<T> {
    pub fn with_time_provider(config: CheckerConfig, time_provider: T) -> Self {
        Self {
            window: ValidityWindow::new(config.validity_window),
            config,
            time_provider,
        }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Checks a puzzle against the current time.
    pub fn check(&self, puzzle: &str) -> Result<(), CheckError> {
        self.check_at(puzzle, self.time_provider.now())
    }

    /// Checks a puzzle as of `now`.
    ///
    /// Work is verified before the token is split, so cheap spam never reaches
    /// timestamp parsing.
    pub fn check_at(&self, puzzle: &str, now: DateTime<Utc>) -> Result<(), CheckError> {
        let digest = puzzle_digest(puzzle);
        // Difficulty above the digest length is never met.
        if !meets_difficulty(&digest, self.config.difficulty) {
            return Err(CheckError::InsufficientWork);
        }
        let fields = PuzzleFields::parse(puzzle)?;
        let ts = parse_utc(fields.timestamp, &self.config.date_format)?;
        self.window.check(ts, now)
    }
}
