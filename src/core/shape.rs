//! Hand shapes.
//!
//! A `Shape` is a symbolic move drawn from a closed set that is fixed per
//! game variant. The engine never interprets shapes beyond equality; what a
//! shape beats is decided entirely by the rule set.
//!
//! ## Implementing a variant
//!
//! ```
//! use rust_rps::core::Shape;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Coin {
//!     Heads,
//!     Tails,
//! }
//!
//! impl std::fmt::Display for Coin {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str(self.name())
//!     }
//! }
//!
//! impl Shape for Coin {
//!     fn all() -> &'static [Self] {
//!         &[Coin::Heads, Coin::Tails]
//!     }
//!
//!     fn name(self) -> &'static str {
//!         match self {
//!             Coin::Heads => "HEADS",
//!             Coin::Tails => "TAILS",
//!         }
//!     }
//! }
//!
//! assert_eq!(Coin::from_name("tails"), Some(Coin::Tails));
//! assert_eq!(Coin::from_name("edge"), None);
//! ```

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A finite, equality-comparable symbolic move for one game variant.
///
/// Two shapes are the same move exactly when they compare equal.
pub trait Shape: Copy + Eq + Hash + Debug + Display + 'static {
    /// Every shape of the variant, in declaration order.
    fn all() -> &'static [Self];

    /// Upper-case symbolic name (`"ROCK"`).
    fn name(self) -> &'static str;

    /// Look up a shape by name, ignoring ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|shape| shape.name().eq_ignore_ascii_case(name.trim()))
    }
}
