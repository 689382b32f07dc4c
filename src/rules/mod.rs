//! Rules: which shape beats which.
//!
//! A `Rule` binds one shape to the shapes it defeats. A `RuleSet` holds one
//! rule per shape and is the only thing the engine consults to decide a
//! round. Variants supply their rules as plain data.

pub mod rule;
pub mod rule_set;

pub use rule::{Rule, RuleOutcome};
pub use rule_set::RuleSet;
