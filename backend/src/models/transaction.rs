//! Transaction models
//!
//! Two kinds of money movement between players:
//! - `SettlementTransaction`: computed instruction, "from pays to amount"
//! - `SidePayment`: a payment the players already made outside the app,
//!   recorded so settlement can net it out
//!
//! CRITICAL: All money values are f64 currency units

use serde::{Deserialize, Serialize};

use crate::models::player::Player;

/// A computed settlement instruction: `from` must pay `to` exactly `amount`
///
/// Computed on demand and never mutated; the caller persists the chosen
/// list verbatim when a game is finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementTransaction {
    /// Player who pays
    pub from: Player,

    /// Player who receives
    pub to: Player,

    /// Amount to move, always positive
    pub amount: f64,
}

/// A payment already exchanged between two players during play
///
/// Example: Bob hands Alice $10 in cash mid-game, or sends it over Venmo.
/// Recording it lets the settlement engine reduce the payer's outstanding
/// debt and the receiver's outstanding credit before matching.
///
/// # Example
/// ```
/// use poker_ledger_core_rs::{Player, SidePayment};
///
/// let alice = Player::new("Alice".to_string(), 100.0);
/// let bob = Player::new("Bob".to_string(), 100.0);
///
/// let payment = SidePayment::new(alice, bob, 10.0, "Venmo");
/// assert_eq!(payment.amount, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidePayment {
    /// Player who already paid
    pub from: Player,

    /// Player who already received
    pub to: Player,

    /// Amount moved, always positive
    pub amount: f64,

    /// Free-text annotation (e.g. "Venmo", "cash at the table")
    pub description: String,
}

impl SidePayment {
    /// Record a payment of `amount` from `from` to `to`
    ///
    /// # Panics
    /// Panics if `amount` is not positive.
    pub fn new(from: Player, to: Player, amount: f64, description: impl Into<String>) -> Self {
        assert!(amount > 0.0, "amount must be positive");
        Self {
            from,
            to,
            amount,
            description: description.into(),
        }
    }
}
