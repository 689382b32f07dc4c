//! Built-in game variants and the configured match runner.
//!
//! Each variant is just data: a shape enum and its rules. `run_match` picks
//! the variant named in a `MatchConfig`, resolves both players' strategies
//! against its shapes, and plays the configured number of rounds.

pub mod classic;
pub mod lizard;

pub use classic::{classic_rules, new_classic_game, ClassicShape};
pub use lizard::{lizard_rules, new_lizard_game, LizardShape};

use crate::core::{GameRng, MatchConfig, Result, Shape, Variant};
use crate::game::{Game, GameResult};
use crate::rules::Rule;
use crate::strategy;

/// Shape names of a variant, in declaration order.
#[must_use]
pub fn shape_names(variant: Variant) -> Vec<&'static str> {
    match variant {
        Variant::Classic => names::<ClassicShape>(),
        Variant::Lizard => names::<LizardShape>(),
    }
}

fn names<S: Shape>() -> Vec<&'static str> {
    S::all().iter().map(|s| s.name()).collect()
}

/// Play the match described by `config`.
///
/// Without a configured seed one is drawn from the OS and logged, so any
/// run can be replayed.
///
/// ```
/// use rust_rps::core::{MatchConfig, StrategySpec};
/// use rust_rps::games::run_match;
///
/// let config = MatchConfig::new()
///     .with_rounds(20)
///     .with_player_b(StrategySpec::fixed("ROCK"));
///
/// let result = run_match(&config).unwrap();
/// assert_eq!(result.player_a_wins(), 20);
/// ```
pub fn run_match(config: &MatchConfig) -> Result<GameResult> {
    let mut rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!(
        "playing {} rounds of {} (seed {})",
        config.rounds,
        config.variant,
        rng.seed()
    );

    match config.variant {
        Variant::Classic => play(config, &mut rng, classic_rules()),
        Variant::Lizard => play(config, &mut rng, lizard_rules()),
    }
}

fn play<S: Shape>(config: &MatchConfig, rng: &mut GameRng, rules: Vec<Rule<S>>) -> Result<GameResult> {
    let player_a = strategy::from_spec::<S>(&config.player_a, rng.fork())?;
    let player_b = strategy::from_spec::<S>(&config.player_b, rng.fork())?;

    let mut game = Game::builder()
        .player_a_boxed(player_a)
        .player_b_boxed(player_b)
        .rules(rules)
        .build()?;
    game.play_game(config.rounds)
}
