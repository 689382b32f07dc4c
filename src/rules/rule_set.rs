//! Rule sets: one rule per shape.
//!
//! A `RuleSet` is the lookup table the engine consults every round. It is
//! immutable once built. Coverage is not enforced at construction (a rule
//! set may leave shapes out); `missing_shapes` and `conflicts` report the
//! two ways a rule set can be malformed without rejecting it.

use rustc_hash::FxHashMap;

use super::rule::{Rule, RuleOutcome};
use crate::core::{GameError, Result, Shape};

/// Rules keyed by subject shape.
///
/// ```
/// use rust_rps::games::{classic_rules, ClassicShape};
/// use rust_rps::rules::{RuleOutcome, RuleSet};
///
/// let rules = RuleSet::new(classic_rules()).unwrap();
///
/// assert!(rules.is_complete());
/// assert_eq!(
///     rules.evaluate(ClassicShape::Paper, ClassicShape::Rock),
///     Some(RuleOutcome::Win)
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RuleSet<S: Shape> {
    rules: FxHashMap<S, Rule<S>>,
}

impl<S: Shape> RuleSet<S> {
    /// Build a rule set.
    ///
    /// Two rules for the same subject are rejected. An empty collection is
    /// accepted; every lookup against it will miss.
    pub fn new(rules: impl IntoIterator<Item = Rule<S>>) -> Result<Self> {
        let mut map = FxHashMap::default();
        for rule in rules {
            let subject = rule.subject();
            if map.insert(subject, rule).is_some() {
                return Err(GameError::config(format!(
                    "duplicate game rule for hand shape: {subject}"
                )));
            }
        }
        log::debug!("rule set built with {} rules", map.len());
        Ok(Self { rules: map })
    }

    /// A rule set with no rules.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: FxHashMap::default(),
        }
    }

    /// Get the rule for `shape`.
    #[must_use]
    pub fn get(&self, shape: S) -> Option<&Rule<S>> {
        self.rules.get(&shape)
    }

    /// Check if `shape` has a rule.
    #[must_use]
    pub fn contains(&self, shape: S) -> bool {
        self.rules.contains_key(&shape)
    }

    /// Classify `mine` against `theirs` using `mine`'s rule.
    ///
    /// `None` when `mine` has no rule.
    #[must_use]
    pub fn evaluate(&self, mine: S, theirs: S) -> Option<RuleOutcome> {
        self.get(mine).map(|rule| rule.evaluate(theirs))
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in the variant's declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule<S>> {
        S::all().iter().filter_map(move |shape| self.rules.get(shape))
    }

    /// Shapes of the variant that have no rule.
    #[must_use]
    pub fn missing_shapes(&self) -> Vec<S> {
        S::all()
            .iter()
            .copied()
            .filter(|shape| !self.rules.contains_key(shape))
            .collect()
    }

    /// True when every shape of the variant has a rule.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_shapes().is_empty()
    }

    /// Pairs of shapes whose rules both claim the win over each other.
    ///
    /// A well-formed rule set returns nothing here. Each pair is reported
    /// once, in declaration order.
    #[must_use]
    pub fn conflicts(&self) -> Vec<(S, S)> {
        let shapes = S::all();
        let mut out = Vec::new();
        for (i, &x) in shapes.iter().enumerate() {
            for &y in &shapes[i + 1..] {
                let x_beats_y = self.get(x).is_some_and(|rule| rule.beats(y));
                let y_beats_x = self.get(y).is_some_and(|rule| rule.beats(x));
                if x_beats_y && y_beats_x {
                    out.push((x, y));
                }
            }
        }
        out
    }
}
