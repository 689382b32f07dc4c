//! # rust-rps
//!
//! A rule engine for rock-paper-scissors style games between two automated
//! players.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic**: The engine knows nothing about rock or paper.
//!    Variants supply a shape enum and a list of rules.
//!
//! 2. **Rules as Data**: Each `Rule` names one shape and the shapes it
//!    defeats. A round is decided by Player A's rule alone.
//!
//! 3. **Reproducible**: Random players draw from a seeded `GameRng`, so the
//!    same seed replays the same match.
//!
//! ## Example
//!
//! ```
//! use rust_rps::core::GameRng;
//! use rust_rps::games::new_classic_game;
//!
//! let mut game = new_classic_game(GameRng::new(42)).unwrap();
//! let result = game.play_game(100).unwrap();
//!
//! assert_eq!(result.rounds(), 100);
//! println!("{result}");
//! ```
//!
//! ## Modules
//!
//! - `core`: Shapes, errors, RNG, match configuration
//! - `rules`: `Rule` and `RuleSet`
//! - `strategy`: How players choose shapes
//! - `game`: The engine, its builder, and `GameResult`
//! - `games`: Classic and lizard-Spock variants, configured match runner

#![warn(missing_docs)]

pub mod core;
pub mod rules;
pub mod strategy;
pub mod game;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    GameError, Result, Shape,
    GameRng,
    MatchConfig, StrategySpec, Variant,
};

pub use crate::rules::{Rule, RuleOutcome, RuleSet};

pub use crate::strategy::{Cycle, Fixed, Strategy, UniformRandom};

pub use crate::game::{Game, GameBuilder, GameResult, Percentage, Round, RoundOutcome};

pub use crate::games::{run_match, ClassicShape, LizardShape};
