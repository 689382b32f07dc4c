//! A single rule: one shape and the shapes it defeats.

use smallvec::SmallVec;

use crate::core::Shape;

/// Result of applying a rule, from the rule subject's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleOutcome {
    /// The subject defeats the other shape.
    Win,
    /// The subject loses to the other shape.
    Lose,
    /// Both shapes are the same.
    Draw,
}

/// Declares which shapes `subject` defeats.
///
/// Anything not listed (and not equal to the subject) beats it. A subject
/// never defeats itself: if it appears among its own defeats it is dropped.
///
/// ```
/// use rust_rps::games::ClassicShape::*;
/// use rust_rps::rules::{Rule, RuleOutcome};
///
/// let rock = Rule::of(Rock, [Scissors]);
///
/// assert_eq!(rock.evaluate(Scissors), RuleOutcome::Win);
/// assert_eq!(rock.evaluate(Paper), RuleOutcome::Lose);
/// assert_eq!(rock.evaluate(Rock), RuleOutcome::Draw);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule<S: Shape> {
    subject: S,
    /// Variants have a handful of shapes, so a linear scan beats hashing.
    defeats: SmallVec<[S; 4]>,
}

impl<S: Shape> Rule<S> {
    /// Create a rule for `subject`. An empty `defeats` means the subject
    /// can only draw or lose.
    #[must_use]
    pub fn of(subject: S, defeats: impl IntoIterator<Item = S>) -> Self {
        let mut set: SmallVec<[S; 4]> = SmallVec::new();
        for shape in defeats {
            if shape != subject && !set.contains(&shape) {
                set.push(shape);
            }
        }
        Self {
            subject,
            defeats: set,
        }
    }

    /// The shape this rule applies to.
    #[must_use]
    pub fn subject(&self) -> S {
        self.subject
    }

    /// Shapes the subject defeats, in the order they were given.
    #[must_use]
    pub fn defeats(&self) -> &[S] {
        &self.defeats
    }

    /// Does the subject defeat `other`?
    #[must_use]
    pub fn beats(&self, other: S) -> bool {
        self.defeats.contains(&other)
    }

    /// Classify the subject against `other`.
    #[must_use]
    pub fn evaluate(&self, other: S) -> RuleOutcome {
        if other == self.subject {
            RuleOutcome::Draw
        } else if self.beats(other) {
            RuleOutcome::Win
        } else {
            RuleOutcome::Lose
        }
    }
}

impl<S: Shape> std::fmt::Display for Rule<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} >", self.subject)?;
        if self.defeats.is_empty() {
            return f.write_str(" (nothing)");
        }
        for (i, shape) in self.defeats.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{shape}")?;
        }
        Ok(())
    }
}
