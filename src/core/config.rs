//! Match configuration.
//!
//! A `MatchConfig` names the variant, the number of rounds, the seed and how
//! each player picks shapes. Shapes are referenced by name so the same
//! config type serves every variant; names are resolved when the game is
//! built. Defaults reproduce the stock match: classic rules, 100 rounds,
//! Player A always plays PAPER, Player B plays uniformly at random.
//!
//! ```
//! use rust_rps::core::{MatchConfig, StrategySpec, Variant};
//!
//! let config = MatchConfig::new()
//!     .with_variant(Variant::Lizard)
//!     .with_rounds(10)
//!     .with_seed(42)
//!     .with_player_b(StrategySpec::fixed("SPOCK"));
//!
//! assert_eq!(config.rounds, 10);
//! assert_eq!(config.player_a, StrategySpec::fixed("PAPER"));
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Rounds played when nothing else is configured.
pub const DEFAULT_ROUNDS: u32 = 100;

/// Built-in game variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Rock, paper, scissors.
    #[default]
    Classic,
    /// Rock, paper, scissors, lizard, Spock.
    Lizard,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Classic => f.write_str("classic"),
            Variant::Lizard => f.write_str("lizard"),
        }
    }
}

impl FromStr for Variant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "lizard" | "lizard-spock" | "lizard_spock" => Ok(Variant::Lizard),
            other => Err(GameError::config(format!("unknown variant '{other}'"))),
        }
    }
}

/// How one player chooses shapes, by shape name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategySpec {
    /// Always the same shape.
    Fixed {
        /// Shape name, resolved against the variant.
        shape: String,
    },
    /// Uniform over every shape of the variant.
    Random,
    /// Repeat a sequence of shapes.
    Cycle {
        /// Shape names, played in order.
        shapes: Vec<String>,
    },
}

impl StrategySpec {
    /// Always play `shape`.
    pub fn fixed(shape: impl Into<String>) -> Self {
        Self::Fixed {
            shape: shape.into(),
        }
    }

    /// Repeat `shapes` in order.
    pub fn cycle<I, T>(shapes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Cycle {
            shapes: shapes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parses `random`, a single shape name (`paper`), or a comma separated
/// sequence (`rock,paper`).
impl FromStr for StrategySpec {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GameError::config("empty strategy"));
        }
        if s.eq_ignore_ascii_case("random") {
            return Ok(Self::Random);
        }
        if s.contains(',') {
            let shapes: Vec<String> = s
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_owned)
                .collect();
            return Ok(Self::Cycle { shapes });
        }
        Ok(Self::fixed(s))
    }
}

/// Everything needed to play one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Which shape set and rule set to use.
    pub variant: Variant,

    /// Number of rounds to play.
    pub rounds: u32,

    /// Seed for random players. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Player A's strategy.
    pub player_a: StrategySpec,

    /// Player B's strategy.
    pub player_b: StrategySpec,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,
            rounds: DEFAULT_ROUNDS,
            seed: None,
            player_a: StrategySpec::fixed("PAPER"),
            player_b: StrategySpec::Random,
        }
    }
}

impl MatchConfig {
    /// Create the default match configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Fix the seed for random players.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set Player A's strategy.
    #[must_use]
    pub fn with_player_a(mut self, strategy: StrategySpec) -> Self {
        self.player_a = strategy;
        self
    }

    /// Set Player B's strategy.
    #[must_use]
    pub fn with_player_b(mut self, strategy: StrategySpec) -> Self {
        self.player_b = strategy;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GameError::config(format!("invalid match config: {e}")))
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            GameError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.rounds, 100);
        assert_eq!(config.seed, None);
        assert_eq!(config.player_a, StrategySpec::fixed("PAPER"));
        assert_eq!(config.player_b, StrategySpec::Random);
    }

    #[test]
    fn test_builders() {
        let config = MatchConfig::new()
            .with_variant(Variant::Lizard)
            .with_rounds(7)
            .with_seed(99)
            .with_player_a(StrategySpec::Random)
            .with_player_b(StrategySpec::cycle(["ROCK", "SPOCK"]));

        assert_eq!(config.variant, Variant::Lizard);
        assert_eq!(config.rounds, 7);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.player_a, StrategySpec::Random);
        assert_eq!(
            config.player_b,
            StrategySpec::Cycle {
                shapes: vec!["ROCK".into(), "SPOCK".into()]
            }
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MatchConfig::from_json_str(r#"{"variant": "lizard", "rounds": 5}"#).unwrap();
        assert_eq!(config.variant, Variant::Lizard);
        assert_eq!(config.rounds, 5);
        assert_eq!(config.player_a, StrategySpec::fixed("PAPER"));
    }

    #[test]
    fn test_json_strategies() {
        let json = r#"{
            "player_a": {"kind": "cycle", "shapes": ["rock", "paper"]},
            "player_b": {"kind": "fixed", "shape": "scissors"},
            "seed": 3
        }"#;
        let config = MatchConfig::from_json_str(json).unwrap();
        assert_eq!(config.player_a, StrategySpec::cycle(["rock", "paper"]));
        assert_eq!(config.player_b, StrategySpec::fixed("scissors"));
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_malformed_json_is_configuration_error() {
        let err = MatchConfig::from_json_str("{ rounds: }").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = MatchConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("Classic".parse::<Variant>().unwrap(), Variant::Classic);
        assert_eq!("lizard-spock".parse::<Variant>().unwrap(), Variant::Lizard);
        assert!("chess".parse::<Variant>().is_err());
    }

    #[test]
    fn test_strategy_spec_from_str() {
        assert_eq!("random".parse::<StrategySpec>().unwrap(), StrategySpec::Random);
        assert_eq!("paper".parse::<StrategySpec>().unwrap(), StrategySpec::fixed("paper"));
        assert_eq!(
            "rock, paper,".parse::<StrategySpec>().unwrap(),
            StrategySpec::cycle(["rock", "paper"])
        );
        assert!("  ".parse::<StrategySpec>().is_err());
    }
}
