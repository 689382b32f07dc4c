//! The game engine: two strategies, one rule set, N rounds.

use super::result::GameResult;
use crate::core::{GameError, Result, Shape};
use crate::rules::{Rule, RuleOutcome, RuleSet};
use crate::strategy::Strategy;

/// Outcome of one round, from the engine's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player A's shape defeats Player B's.
    PlayerAWins,
    /// Player B's shape defeats Player A's.
    PlayerBWins,
    /// Both played the same shape.
    Draw,
}

impl From<RuleOutcome> for RoundOutcome {
    fn from(outcome: RuleOutcome) -> Self {
        match outcome {
            RuleOutcome::Win => RoundOutcome::PlayerAWins,
            RuleOutcome::Lose => RoundOutcome::PlayerBWins,
            RuleOutcome::Draw => RoundOutcome::Draw,
        }
    }
}

/// One played round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round<S: Shape> {
    /// Player A's shape.
    pub player_a: S,
    /// Player B's shape.
    pub player_b: S,
    /// Who won.
    pub outcome: RoundOutcome,
}

/// A two-player game under a fixed rule set.
///
/// Outcomes are always judged by Player A's rule. The rule set is read-only
/// after construction; the only state that changes during play lives in the
/// strategies and in the counters local to `play_game`.
///
/// ```
/// use rust_rps::games::{classic_rules, ClassicShape};
/// use rust_rps::game::{Game, GameResult};
/// use rust_rps::strategy::Fixed;
///
/// let mut game = Game::builder()
///     .player_a(Fixed(ClassicShape::Paper))
///     .player_b(Fixed(ClassicShape::Rock))
///     .rules(classic_rules())
///     .build()
///     .unwrap();
///
/// assert_eq!(game.play_game(3).unwrap(), GameResult::new(3, 0, 0));
/// ```
pub struct Game<S: Shape> {
    player_a: Box<dyn Strategy<S>>,
    player_b: Box<dyn Strategy<S>>,
    rules: RuleSet<S>,
}

impl<S: Shape> Game<S> {
    /// Assemble a game directly.
    ///
    /// The rule set is taken as given: an empty or incomplete rule set is
    /// only noticed when a round needs a missing rule. Use `builder()` to
    /// fail early instead.
    pub fn new(
        player_a: impl Strategy<S> + 'static,
        player_b: impl Strategy<S> + 'static,
        rules: RuleSet<S>,
    ) -> Self {
        Self::from_boxed(Box::new(player_a), Box::new(player_b), rules)
    }

    /// Assemble a game from already boxed strategies.
    pub fn from_boxed(
        player_a: Box<dyn Strategy<S>>,
        player_b: Box<dyn Strategy<S>>,
        rules: RuleSet<S>,
    ) -> Self {
        Self {
            player_a,
            player_b,
            rules,
        }
    }

    /// Start building a game with eager validation.
    #[must_use]
    pub fn builder() -> GameBuilder<S> {
        GameBuilder::new()
    }

    /// The rule set this game is judged by.
    #[must_use]
    pub fn rules(&self) -> &RuleSet<S> {
        &self.rules
    }

    /// Play a single round.
    ///
    /// Draws Player A's shape, then Player B's, and judges them with Player
    /// A's rule. Fails with `RuleNotFound` when Player A's shape has no rule.
    pub fn play_round(&mut self) -> Result<Round<S>> {
        let a = self.player_a.next_shape();
        let b = self.player_b.next_shape();

        let rule = self
            .rules
            .get(a)
            .ok_or_else(|| GameError::rule_not_found(a))?;

        let outcome = RoundOutcome::from(rule.evaluate(b));
        match outcome {
            RoundOutcome::PlayerAWins => log::debug!("Player A wins. ({a} > {b})"),
            RoundOutcome::PlayerBWins => log::debug!("Player B wins. ({a} < {b})"),
            RoundOutcome::Draw => log::debug!("Round is a draw. ({a})"),
        }

        Ok(Round {
            player_a: a,
            player_b: b,
            outcome,
        })
    }

    /// Play `rounds` rounds and tally the outcomes.
    ///
    /// Rounds run strictly in sequence. The first error aborts the game and
    /// nothing of the partial tally is returned.
    pub fn play_game(&mut self, rounds: u32) -> Result<GameResult> {
        let mut player_a_wins = 0;
        let mut player_b_wins = 0;
        let mut draws = 0;

        for i in 0..rounds {
            log::debug!("Round {}:", i + 1);
            match self.play_round()?.outcome {
                RoundOutcome::PlayerAWins => player_a_wins += 1,
                RoundOutcome::PlayerBWins => player_b_wins += 1,
                RoundOutcome::Draw => draws += 1,
            }
        }

        let result = GameResult::new(player_a_wins, player_b_wins, draws);
        result.log_summary();
        Ok(result)
    }
}

impl<S: Shape> std::fmt::Debug for Game<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

/// Builder that rejects incomplete games at build time.
///
/// Both strategies and at least one rule are required.
pub struct GameBuilder<S: Shape> {
    player_a: Option<Box<dyn Strategy<S>>>,
    player_b: Option<Box<dyn Strategy<S>>>,
    rules: Vec<Rule<S>>,
}

impl<S: Shape> Default for GameBuilder<S> {
    fn default() -> Self {
        Self {
            player_a: None,
            player_b: None,
            rules: Vec::new(),
        }
    }
}

impl<S: Shape> GameBuilder<S> {
    /// Start a builder with no players and no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set Player A's strategy.
    #[must_use]
    pub fn player_a(self, strategy: impl Strategy<S> + 'static) -> Self {
        self.player_a_boxed(Box::new(strategy))
    }

    /// Set Player B's strategy.
    #[must_use]
    pub fn player_b(self, strategy: impl Strategy<S> + 'static) -> Self {
        self.player_b_boxed(Box::new(strategy))
    }

    /// Set Player A's strategy from a box.
    #[must_use]
    pub fn player_a_boxed(mut self, strategy: Box<dyn Strategy<S>>) -> Self {
        self.player_a = Some(strategy);
        self
    }

    /// Set Player B's strategy from a box.
    #[must_use]
    pub fn player_b_boxed(mut self, strategy: Box<dyn Strategy<S>>) -> Self {
        self.player_b = Some(strategy);
        self
    }

    /// Add one rule.
    #[must_use]
    pub fn rule(mut self, rule: Rule<S>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add several rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule<S>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the game.
    pub fn build(self) -> Result<Game<S>> {
        let player_a = self
            .player_a
            .ok_or_else(|| GameError::config("Player A strategy required"))?;
        let player_b = self
            .player_b
            .ok_or_else(|| GameError::config("Player B strategy required"))?;
        if self.rules.is_empty() {
            return Err(GameError::config("At least one game rule required"));
        }
        let rules = RuleSet::new(self.rules)?;
        Ok(Game::from_boxed(player_a, player_b, rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{Cycle, Fixed, UniformRandom};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Token {
        A,
        B,
        C,
    }

    impl std::fmt::Display for Token {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl Shape for Token {
        fn all() -> &'static [Self] {
            &[Token::A, Token::B, Token::C]
        }

        fn name(self) -> &'static str {
            match self {
                Token::A => "A",
                Token::B => "B",
                Token::C => "C",
            }
        }
    }

    fn rule_set(rules: Vec<Rule<Token>>) -> RuleSet<Token> {
        RuleSet::new(rules).unwrap()
    }

    fn expect_err(result: Result<Game<Token>>) -> GameError {
        match result {
            Err(err) => err,
            Ok(_) => panic!("expected build to fail"),
        }
    }

    #[test]
    fn test_incomplete_rule_set() {
        let mut game = Game::new(Fixed(Token::A), Fixed(Token::B), RuleSet::empty());

        let err = game.play_game(1).unwrap_err();
        assert_eq!(err, GameError::rule_not_found(Token::A));
    }

    #[test]
    fn test_player_a_wins() {
        let mut game = Game::new(
            Fixed(Token::A),
            Fixed(Token::B),
            rule_set(vec![Rule::of(Token::A, [Token::B])]),
        );
        assert_eq!(game.play_game(1).unwrap(), GameResult::new(1, 0, 0));
    }

    #[test]
    fn test_player_b_wins() {
        let mut game = Game::new(
            Fixed(Token::A),
            Fixed(Token::B),
            rule_set(vec![Rule::of(Token::A, [Token::A])]),
        );
        assert_eq!(game.play_game(1).unwrap(), GameResult::new(0, 1, 0));
    }

    #[test]
    fn test_drawn() {
        let mut game = Game::new(
            Fixed(Token::A),
            Fixed(Token::A),
            rule_set(vec![Rule::of(Token::A, [Token::B])]),
        );
        assert_eq!(game.play_game(1).unwrap(), GameResult::new(0, 0, 1));
    }

    #[test]
    fn test_zero_rounds() {
        let mut game = Game::new(Fixed(Token::A), Fixed(Token::B), RuleSet::empty());
        assert_eq!(game.play_game(0).unwrap(), GameResult::new(0, 0, 0));
    }

    #[test]
    fn test_count_sums_to_rounds() {
        let mut game = Game::new(
            UniformRandom::seeded(1),
            UniformRandom::seeded(2),
            rule_set(vec![
                Rule::of(Token::A, [Token::B]),
                Rule::of(Token::B, [Token::C]),
                Rule::of(Token::C, [Token::A]),
            ]),
        );
        assert_eq!(game.play_game(10).unwrap().rounds(), 10);
    }

    #[test]
    fn test_play_round_reports_shapes() {
        let mut game = Game::new(
            Fixed(Token::C),
            Fixed(Token::A),
            rule_set(vec![Rule::of(Token::C, [Token::A])]),
        );
        let round = game.play_round().unwrap();
        assert_eq!(round.player_a, Token::C);
        assert_eq!(round.player_b, Token::A);
        assert_eq!(round.outcome, RoundOutcome::PlayerAWins);
    }

    #[test]
    fn test_strategies_called_a_then_b() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let calls = Rc::new(RefCell::new(Vec::new()));
        let calls_a = Rc::clone(&calls);
        let calls_b = Rc::clone(&calls);

        let mut game = Game::new(
            move || {
                calls_a.borrow_mut().push('a');
                Token::A
            },
            move || {
                calls_b.borrow_mut().push('b');
                Token::B
            },
            rule_set(vec![Rule::of(Token::A, [Token::B])]),
        );
        game.play_game(2).unwrap();

        assert_eq!(*calls.borrow(), vec!['a', 'b', 'a', 'b']);
    }

    #[test]
    fn test_missing_rule_aborts_remaining_rounds() {
        let mut game = Game::new(
            Cycle::new([Token::A, Token::C, Token::A]).unwrap(),
            Fixed(Token::B),
            rule_set(vec![Rule::of(Token::A, [Token::B])]),
        );
        let err = game.play_game(3).unwrap_err();
        assert_eq!(err, GameError::rule_not_found(Token::C));
    }

    #[test]
    fn test_builder_requires_player_a() {
        let err = expect_err(
            Game::builder()
                .player_b(Fixed(Token::A))
                .rule(Rule::of(Token::A, [Token::B]))
                .build(),
        );
        assert_eq!(err, GameError::config("Player A strategy required"));
    }

    #[test]
    fn test_builder_requires_player_b() {
        let err = expect_err(
            Game::builder()
                .player_a(Fixed(Token::A))
                .rule(Rule::of(Token::A, [Token::B]))
                .build(),
        );
        assert_eq!(err, GameError::config("Player B strategy required"));
    }

    #[test]
    fn test_builder_requires_rules() {
        let err = expect_err(
            Game::builder()
                .player_a(Fixed(Token::A))
                .player_b(Fixed(Token::B))
                .build(),
        );
        assert_eq!(err, GameError::config("At least one game rule required"));
    }

    #[test]
    fn test_builder_rejects_duplicate_rules() {
        let err = expect_err(
            Game::builder()
                .player_a(Fixed(Token::A))
                .player_b(Fixed(Token::B))
                .rule(Rule::of(Token::A, [Token::B]))
                .rule(Rule::of(Token::A, [Token::C]))
                .build(),
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_builder_builds() {
        let mut game = Game::builder()
            .player_a(Fixed(Token::B))
            .player_b(Fixed(Token::C))
            .rules([Rule::of(Token::B, [Token::C])])
            .build()
            .unwrap();
        assert_eq!(game.rules().len(), 1);
        assert_eq!(game.play_game(4).unwrap(), GameResult::new(4, 0, 0));
    }
}
