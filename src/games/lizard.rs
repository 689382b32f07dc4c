//! Rock, paper, scissors, lizard, Spock.
//!
//! Every shape beats exactly two others and loses to the remaining two, so
//! draws are rarer than in the classic game.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Result, Shape};
use crate::game::Game;
use crate::rules::Rule;
use crate::strategy::{Fixed, UniformRandom};

/// The five hand shapes of the extended variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LizardShape {
    /// Crushes scissors and lizard.
    Rock,
    /// Covers rock, disproves Spock.
    Paper,
    /// Cuts paper, decapitates lizard.
    Scissors,
    /// Eats paper, poisons Spock.
    Lizard,
    /// Vaporizes rock, smashes scissors.
    Spock,
}

impl Shape for LizardShape {
    fn all() -> &'static [Self] {
        &[
            LizardShape::Rock,
            LizardShape::Paper,
            LizardShape::Scissors,
            LizardShape::Lizard,
            LizardShape::Spock,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            LizardShape::Rock => "ROCK",
            LizardShape::Paper => "PAPER",
            LizardShape::Scissors => "SCISSORS",
            LizardShape::Lizard => "LIZARD",
            LizardShape::Spock => "SPOCK",
        }
    }
}

impl std::fmt::Display for LizardShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The five-shape rule set.
#[must_use]
pub fn lizard_rules() -> Vec<Rule<LizardShape>> {
    use LizardShape::*;
    vec![
        Rule::of(Rock, [Scissors, Lizard]),
        Rule::of(Paper, [Rock, Spock]),
        Rule::of(Scissors, [Paper, Lizard]),
        Rule::of(Lizard, [Paper, Spock]),
        Rule::of(Spock, [Rock, Scissors]),
    ]
}

/// Player A always plays PAPER, Player B picks uniformly from `rng`.
pub fn new_lizard_game(rng: GameRng) -> Result<Game<LizardShape>> {
    Game::builder()
        .player_a(Fixed(LizardShape::Paper))
        .player_b(UniformRandom::new(rng))
        .rules(lizard_rules())
        .build()
}
