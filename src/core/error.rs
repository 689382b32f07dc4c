//! Engine error types.
//!
//! Two failure modes exist. Configuration problems are caught while a game
//! is being assembled; a missing rule can only surface once a strategy hands
//! the engine a shape nobody wrote a rule for.

use derive_more::{Display, Error};

/// Errors raised while building or playing a game.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The game could not be assembled (missing strategy, empty or
    /// duplicated rules, unknown shape name, malformed config).
    #[display("configuration error: {reason}")]
    Configuration {
        /// What was wrong.
        reason: String,
    },

    /// Player A produced a shape with no rule in the rule set.
    #[display("no game rule found for hand shape: {shape}")]
    RuleNotFound {
        /// Display form of the offending shape.
        shape: String,
    },
}

impl GameError {
    /// Create a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Create a missing-rule error for `shape`.
    #[must_use]
    pub fn rule_not_found(shape: impl std::fmt::Display) -> Self {
        Self::RuleNotFound {
            shape: shape.to_string(),
        }
    }

    /// True for errors detected at build time.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
