//! Player model
//!
//! Represents one participant's financial stake in a single game:
//! - Buy-in paid at the table
//! - Cumulative rebuys added during play
//! - Cash-out taken at game end
//!
//! CRITICAL: All money values are f64 currency units; comparisons
//! elsewhere use the 0.01 tolerance band.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when updating a player's stake
#[derive(Debug, Error, PartialEq)]
pub enum PlayerError {
    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Amount must not be negative")]
    NegativeAmount,
}

/// One participant's position in a single game
///
/// The cash-out field is only meaningful once the game's cash-out phase
/// has run; until then it stays at 0.
///
/// # Example
/// ```
/// use poker_ledger_core_rs::Player;
///
/// let mut player = Player::new("Alice".to_string(), 50.0);
/// player.record_rebuy(25.0).unwrap();
/// player.set_cash_out(120.0).unwrap();
///
/// assert_eq!(player.buy_in(), 50.0);
/// assert_eq!(player.rebuys(), 25.0);
/// assert_eq!(player.cash_out(), 120.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player identifier (UUID), stable within the game
    id: String,

    /// Display name (not guaranteed unique across games)
    name: String,

    /// Optional avatar reference, carried for the caller's benefit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,

    /// Initial stake paid at the table
    #[serde(default)]
    buy_in: f64,

    /// Cumulative additional amount added to the pot during play
    #[serde(default)]
    rebuys: f64,

    /// Amount walked away with at game end (0 until cash-out)
    #[serde(default)]
    cash_out: f64,
}

impl Player {
    /// Create a new player with the given buy-in and no rebuys or cash-out
    ///
    /// # Panics
    /// Panics if `buy_in` is negative.
    pub fn new(name: String, buy_in: f64) -> Self {
        assert!(buy_in >= 0.0, "buy_in must not be negative");
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            avatar: None,
            buy_in,
            rebuys: 0.0,
            cash_out: 0.0,
        }
    }

    /// Get player ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get avatar reference, if any
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Set avatar reference (builder pattern)
    pub fn with_avatar(mut self, avatar: String) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Get buy-in amount
    pub fn buy_in(&self) -> f64 {
        self.buy_in
    }

    /// Get cumulative rebuy amount
    pub fn rebuys(&self) -> f64 {
        self.rebuys
    }

    /// Get cash-out amount (0 until the cash-out phase has run)
    pub fn cash_out(&self) -> f64 {
        self.cash_out
    }

    /// Add a rebuy to this player's cumulative total
    ///
    /// # Example
    /// ```
    /// use poker_ledger_core_rs::Player;
    ///
    /// let mut player = Player::new("Bob".to_string(), 100.0);
    /// player.record_rebuy(50.0).unwrap();
    /// player.record_rebuy(50.0).unwrap();
    /// assert_eq!(player.rebuys(), 100.0);
    /// ```
    pub fn record_rebuy(&mut self, amount: f64) -> Result<(), PlayerError> {
        if !(amount > 0.0) {
            return Err(PlayerError::NonPositiveAmount);
        }
        self.rebuys += amount;
        Ok(())
    }

    /// Set the cash-out amount
    ///
    /// May be called again to correct a typo while the game is still open;
    /// the game record freezes it by finalizing.
    pub fn set_cash_out(&mut self, amount: f64) -> Result<(), PlayerError> {
        if amount < 0.0 {
            return Err(PlayerError::NegativeAmount);
        }
        self.cash_out = amount;
        Ok(())
    }
}
