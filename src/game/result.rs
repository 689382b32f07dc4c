//! Aggregated match results.

use serde::{Deserialize, Serialize};

/// A percentage with exactly two decimal places.
///
/// Stored as hundredths of a percent so that rounding is exact: `66.67` is
/// `Percentage::from_hundredths(6667)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u32);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(10_000);

    /// Create from hundredths of a percent.
    #[must_use]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// `count` out of `total` as a percentage, rounded half-up to two
    /// decimals. Zero when either is zero.
    ///
    /// `total` is a `u64` so that the sum of three `u32` counts fits.
    #[must_use]
    pub fn of(count: u32, total: u64) -> Self {
        if count == 0 || total == 0 {
            return Self::ZERO;
        }
        let count = u128::from(count);
        let total = u128::from(total);
        // count * 10_000 / total, plus one half of the divisor before truncating
        let hundredths = (count * 20_000 + total) / (2 * total);
        Self(u32::try_from(hundredths).unwrap_or(u32::MAX))
    }

    /// Raw hundredths of a percent.
    #[must_use]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// As a float, e.g. `66.67`.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Outcome counts of a finished game, from Player A's perspective.
///
/// Built once when the last round is played. Totals and rates are derived
/// on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    player_a_wins: u32,
    player_b_wins: u32,
    draws: u32,
}

impl GameResult {
    /// Create a result from raw counts.
    #[must_use]
    pub const fn new(player_a_wins: u32, player_b_wins: u32, draws: u32) -> Self {
        Self {
            player_a_wins,
            player_b_wins,
            draws,
        }
    }

    /// Rounds won by Player A.
    #[must_use]
    pub const fn player_a_wins(&self) -> u32 {
        self.player_a_wins
    }

    /// Rounds won by Player B.
    #[must_use]
    pub const fn player_b_wins(&self) -> u32 {
        self.player_b_wins
    }

    /// Rounds drawn.
    #[must_use]
    pub const fn draws(&self) -> u32 {
        self.draws
    }

    /// Total rounds played. Wider than the counts, since their sum can
    /// exceed `u32::MAX`.
    #[must_use]
    pub const fn rounds(&self) -> u64 {
        self.player_a_wins as u64 + self.player_b_wins as u64 + self.draws as u64
    }

    /// Share of rounds won by Player A.
    #[must_use]
    pub fn player_a_win_rate(&self) -> Percentage {
        Percentage::of(self.player_a_wins, self.rounds())
    }

    /// Share of rounds won by Player B.
    #[must_use]
    pub fn player_b_win_rate(&self) -> Percentage {
        Percentage::of(self.player_b_wins, self.rounds())
    }

    /// Share of rounds drawn.
    #[must_use]
    pub fn draw_rate(&self) -> Percentage {
        Percentage::of(self.draws, self.rounds())
    }

    /// Combine two results, e.g. from consecutive games.
    ///
    /// Returns `None` if any combined count would overflow `u32`.
    #[must_use]
    pub fn merge(self, other: Self) -> Option<Self> {
        Some(Self::new(
            self.player_a_wins.checked_add(other.player_a_wins)?,
            self.player_b_wins.checked_add(other.player_b_wins)?,
            self.draws.checked_add(other.draws)?,
        ))
    }

    /// Write the three summary lines at info level.
    pub fn log_summary(&self) {
        log::info!(
            "Player A won {} rounds. ({} %)",
            self.player_a_wins,
            self.player_a_win_rate()
        );
        log::info!(
            "Player B won {} rounds. ({} %)",
            self.player_b_wins,
            self.player_b_win_rate()
        );
        log::info!("{} rounds were drawn. ({} %)", self.draws, self.draw_rate());
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Player A won {} rounds. ({} %)",
            self.player_a_wins,
            self.player_a_win_rate()
        )?;
        writeln!(
            f,
            "Player B won {} rounds. ({} %)",
            self.player_b_wins,
            self.player_b_win_rate()
        )?;
        write!(f, "{} rounds were drawn. ({} %)", self.draws, self.draw_rate())
    }
}
