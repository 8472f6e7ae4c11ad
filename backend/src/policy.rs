//! Host-fee accounting policy
//!
//! Single source of truth for the "total invested" and "net result"
//! arithmetic. The app's screens historically each carried their own copy of
//! these formulas and drifted apart (fee counted into investment on some
//! screens, host fee income credited on others); every caller now goes
//! through `FeePolicy` instead.
//!
//! # Critical Invariants
//!
//! 1. Net results over a balanced game sum to zero (plus fee income minus
//!    fees charged, which cancel across the table)
//! 2. Non-finite inputs are treated as 0, never propagated

use serde::{Deserialize, Serialize};

use crate::models::player::Player;

/// How the per-player host fee enters the accounting
///
/// The host always receives `fee_per_player × player_count` as credited
/// income in their net result. Whether the fee is *also* counted into each
/// player's invested total depends on whether buy-ins were recorded as
/// pot-only amounts (fee paid on top) or as the full amount handed over.
///
/// # Example
/// ```
/// use poker_ledger_core_rs::{FeePolicy, Player};
///
/// let mut player = Player::new("Alice".to_string(), 50.0);
/// player.record_rebuy(25.0).unwrap();
/// player.set_cash_out(120.0).unwrap();
///
/// let policy = FeePolicy::new(5.0);
/// assert_eq!(policy.invested(&player), 75.0);
/// // Host of a 3-player table collects 15.0 in fees
/// assert_eq!(policy.net_result(&player, true, 3), 120.0 + 15.0 - 75.0);
/// assert_eq!(policy.net_result(&player, false, 3), 120.0 - 75.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeePolicy {
    /// Per-player fee collected by the host, separate from the pot
    pub fee_per_player: f64,

    /// Count the fee into each player's invested total
    ///
    /// Leave false when recorded buy-ins already represent the full amount
    /// each player handed over.
    pub fee_in_investment: bool,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            fee_per_player: 0.0,
            fee_in_investment: false,
        }
    }
}

impl FeePolicy {
    /// Create a policy with the given per-player fee
    ///
    /// # Panics
    /// Panics if `fee_per_player` is negative.
    pub fn new(fee_per_player: f64) -> Self {
        assert!(fee_per_player >= 0.0, "fee_per_player must not be negative");
        Self {
            fee_per_player,
            fee_in_investment: false,
        }
    }

    /// Count the fee into invested totals (builder pattern)
    pub fn with_fee_in_investment(mut self) -> Self {
        self.fee_in_investment = true;
        self
    }

    /// Total fees the host collects from a table of `player_count`
    pub fn total_fees(&self, player_count: usize) -> f64 {
        self.fee_per_player * player_count as f64
    }

    /// Total amount this player put in: buy-in plus rebuys, plus the host
    /// fee when the policy charges it to the investment
    pub fn invested(&self, player: &Player) -> f64 {
        let base = finite_or_zero(player.buy_in()) + finite_or_zero(player.rebuys());
        if self.fee_in_investment {
            base + self.fee_per_player
        } else {
            base
        }
    }

    /// Signed net profit/loss for one player
    ///
    /// Positive = profit, negative = loss. The host additionally receives
    /// the collected fees as income.
    pub fn net_result(&self, player: &Player, is_host: bool, player_count: usize) -> f64 {
        let fee_income = if is_host {
            self.total_fees(player_count)
        } else {
            0.0
        };
        finite_or_zero(player.cash_out()) + fee_income - self.invested(player)
    }
}

/// Missing or corrupt numeric input counts as 0
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
