//! Classic rock, paper, scissors.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Result, Shape};
use crate::game::Game;
use crate::rules::Rule;
use crate::strategy::{Fixed, UniformRandom};

/// The three classic hand shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClassicShape {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Shape for ClassicShape {
    fn all() -> &'static [Self] {
        &[ClassicShape::Rock, ClassicShape::Paper, ClassicShape::Scissors]
    }

    fn name(self) -> &'static str {
        match self {
            ClassicShape::Rock => "ROCK",
            ClassicShape::Paper => "PAPER",
            ClassicShape::Scissors => "SCISSORS",
        }
    }
}

impl std::fmt::Display for ClassicShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rock crushes scissors, paper covers rock, scissors cut paper.
#[must_use]
pub fn classic_rules() -> Vec<Rule<ClassicShape>> {
    use ClassicShape::*;
    vec![
        Rule::of(Rock, [Scissors]),
        Rule::of(Paper, [Rock]),
        Rule::of(Scissors, [Paper]),
    ]
}

/// Player A always plays PAPER, Player B picks uniformly from `rng`.
pub fn new_classic_game(rng: GameRng) -> Result<Game<ClassicShape>> {
    Game::builder()
        .player_a(Fixed(ClassicShape::Paper))
        .player_b(UniformRandom::new(rng))
        .rules(classic_rules())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RuleOutcome, RuleSet};
    use super::ClassicShape::*;

    #[test]
    fn test_rules_complete_and_consistent() {
        let rules = RuleSet::new(classic_rules()).unwrap();
        assert!(rules.is_complete());
        assert!(rules.conflicts().is_empty());
    }

    #[test]
    fn test_every_pair_decided_once() {
        let rules = RuleSet::new(classic_rules()).unwrap();
        for &x in ClassicShape::all() {
            for &y in ClassicShape::all() {
                let forward = rules.evaluate(x, y).unwrap();
                let backward = rules.evaluate(y, x).unwrap();
                match forward {
                    RuleOutcome::Draw => assert_eq!(x, y),
                    RuleOutcome::Win => assert_eq!(backward, RuleOutcome::Lose),
                    RuleOutcome::Lose => assert_eq!(backward, RuleOutcome::Win),
                }
            }
        }
    }

    #[test]
    fn test_paper_never_loses_to_rock() {
        let rules = RuleSet::new(classic_rules()).unwrap();
        assert_eq!(rules.evaluate(Paper, Rock), Some(RuleOutcome::Win));
        assert_eq!(rules.evaluate(Paper, Scissors), Some(RuleOutcome::Lose));
    }

    #[test]
    fn test_new_classic_game() {
        let mut game = new_classic_game(GameRng::new(42)).unwrap();
        let result = game.play_game(100).unwrap();
        assert_eq!(result.rounds(), 100);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Scissors).unwrap(), "\"SCISSORS\"");
        let back: ClassicShape = serde_json::from_str("\"ROCK\"").unwrap();
        assert_eq!(back, Rock);
    }
}
