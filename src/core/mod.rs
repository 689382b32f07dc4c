//! Core types shared by every variant: shapes, errors, RNG, configuration.
//!
//! Nothing in here knows about a particular shape set. Variants plug in by
//! implementing `Shape` for their own enum.

pub mod shape;
pub mod error;
pub mod rng;
pub mod config;

pub use shape::Shape;
pub use error::{GameError, Result};
pub use rng::GameRng;
pub use config::{MatchConfig, StrategySpec, Variant, DEFAULT_ROUNDS};
