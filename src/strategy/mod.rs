//! Player strategies.
//!
//! A strategy is anything that can produce the next shape. The engine calls
//! each player's strategy exactly once per round, Player A first. Closures
//! work directly:
//!
//! ```
//! use rust_rps::games::ClassicShape;
//! use rust_rps::strategy::Strategy;
//!
//! let mut always_rock = || ClassicShape::Rock;
//! assert_eq!(always_rock.next_shape(), ClassicShape::Rock);
//! ```
//!
//! Strategies take `&mut self`, so a stateful strategy (a random source, a
//! cycle position) needs no interior mutability.

use crate::core::{GameError, GameRng, Result, Shape, StrategySpec};

/// Produces one shape per round.
pub trait Strategy<S: Shape> {
    /// The shape to play this round. Must belong to the variant's shape set.
    fn next_shape(&mut self) -> S;
}

impl<S, F> Strategy<S> for F
where
    S: Shape,
    F: FnMut() -> S,
{
    fn next_shape(&mut self) -> S {
        self()
    }
}

/// Always plays the same shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixed<S: Shape>(pub S);

impl<S: Shape> Strategy<S> for Fixed<S> {
    fn next_shape(&mut self) -> S {
        self.0
    }
}

/// Plays every shape of the variant with equal probability.
#[derive(Clone, Debug)]
pub struct UniformRandom {
    rng: GameRng,
}

impl UniformRandom {
    /// Draw from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Draw from a fresh generator seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<S: Shape> Strategy<S> for UniformRandom {
    fn next_shape(&mut self) -> S {
        let shapes = S::all();
        shapes[self.rng.gen_range_usize(0..shapes.len())]
    }
}

/// Plays a fixed sequence of shapes, starting over at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle<S: Shape> {
    shapes: Vec<S>,
    position: usize,
}

impl<S: Shape> Cycle<S> {
    /// Cycle through `shapes`. The sequence must not be empty.
    pub fn new(shapes: impl IntoIterator<Item = S>) -> Result<Self> {
        let shapes: Vec<S> = shapes.into_iter().collect();
        if shapes.is_empty() {
            return Err(GameError::config("cycle strategy needs at least one shape"));
        }
        Ok(Self { shapes, position: 0 })
    }
}

impl<S: Shape> Strategy<S> for Cycle<S> {
    fn next_shape(&mut self) -> S {
        let shape = self.shapes[self.position];
        self.position = (self.position + 1) % self.shapes.len();
        shape
    }
}

/// Resolve a configured strategy into a playable one.
///
/// Shape names are looked up in `S`; an unknown name is a configuration
/// error. Random strategies draw from `rng`.
pub fn from_spec<S: Shape>(spec: &StrategySpec, rng: GameRng) -> Result<Box<dyn Strategy<S>>> {
    match spec {
        StrategySpec::Fixed { shape } => Ok(Box::new(Fixed(parse_shape::<S>(shape)?))),
        StrategySpec::Random => Ok(Box::new(UniformRandom::new(rng))),
        StrategySpec::Cycle { shapes } => {
            let shapes = shapes
                .iter()
                .map(|name| parse_shape::<S>(name))
                .collect::<Result<Vec<S>>>()?;
            Ok(Box::new(Cycle::new(shapes)?))
        }
    }
}

fn parse_shape<S: Shape>(name: &str) -> Result<S> {
    S::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = S::all().iter().map(|s| s.name()).collect();
        GameError::config(format!(
            "unknown hand shape '{name}' (expected one of {})",
            known.join(", ")
        ))
    })
}
