//! Playing games and aggregating their results.
//!
//! - `engine`: `Game`, its builder, and per-round outcomes
//! - `result`: `GameResult` counts and `Percentage` rates

pub mod engine;
pub mod result;

pub use engine::{Game, GameBuilder, Round, RoundOutcome};
pub use result::{GameResult, Percentage};
