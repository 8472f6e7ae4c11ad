//! Game model
//!
//! The record of one poker night: roster, stake configuration, rebuy
//! history, and (once finished) the persisted settlement transactions.
//!
//! The game is the gate-keeper for settlement: the engine itself assumes a
//! balanced table, so `finalize` refuses to run until the cash-out total
//! matches the pot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::player::{Player, PlayerError};
use crate::models::transaction::{SettlementTransaction, SidePayment};
use crate::policy::FeePolicy;
use crate::settlement::{
    compute_settlement, net_positions, NetPosition, SettlementMode, TOLERANCE,
};

/// Errors that can occur on a game record
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("No player named {name}")]
    UnknownPlayerName { name: String },

    #[error("No player with id {id}")]
    UnknownPlayer { id: String },

    #[error("Cash-out total {cash_out} does not match pot total {pot}")]
    CashOutImbalance { pot: f64, cash_out: f64 },

    #[error("Game is already finished")]
    AlreadyFinished,

    #[error(transparent)]
    Player(#[from] PlayerError),
}

/// One rebuy, as it happened at the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebuyEntry {
    /// Unique entry identifier (UUID)
    pub id: String,

    /// Player who bought back in
    pub player_id: String,

    /// Display name at the time of the rebuy
    pub player_name: String,

    /// Amount added to the pot
    pub amount: f64,

    /// Caller-supplied label, e.g. "15:45"
    pub timestamp: String,
}

/// A single poker night
///
/// # Example
/// ```
/// use poker_ledger_core_rs::Game;
///
/// let mut game = Game::new(
///     "2024-01-08".to_string(),
///     vec!["Alice".to_string(), "Bob".to_string()],
///     "Alice",
///     100.0, // buy-in
///     0.0,   // host fee
///     50.0,  // default rebuy
/// )
/// .unwrap();
///
/// let bob_id = game.players()[1].id().to_string();
/// game.record_default_rebuy(&bob_id, "16:20".to_string()).unwrap();
/// assert_eq!(game.total_pot(), 250.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Unique game identifier (UUID)
    id: String,

    /// Caller-supplied date label, e.g. "2024-01-15"
    date: String,

    /// Roster; order is stable for display, irrelevant to settlement
    players: Vec<Player>,

    /// Buy-in every player paid to sit down
    buy_in_amount: f64,

    /// Per-player fee collected by the host, separate from the pot
    host_fee: f64,

    /// Amount used when a rebuy is recorded without an explicit amount
    default_rebuy_amount: f64,

    /// Id of the hosting player
    host_id: String,

    /// Optional co-host (display concern, no accounting effect)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    co_host_id: Option<String>,

    /// Every rebuy in table order
    #[serde(default)]
    rebuy_history: Vec<RebuyEntry>,

    /// Settlement chosen at finalization, empty while the game runs
    #[serde(default)]
    settlement_transactions: Vec<SettlementTransaction>,

    /// False once the game has been finalized
    is_active: bool,
}

impl Game {
    /// Start a new game: every named player is seated with the full buy-in
    /// paid, no rebuys, no cash-out
    ///
    /// `host_name` must be one of `names`.
    ///
    /// # Panics
    /// Panics if `buy_in_amount`, `host_fee`, or `default_rebuy_amount`
    /// is negative.
    pub fn new(
        date: String,
        names: Vec<String>,
        host_name: &str,
        buy_in_amount: f64,
        host_fee: f64,
        default_rebuy_amount: f64,
    ) -> Result<Self, GameError> {
        assert!(buy_in_amount >= 0.0, "buy_in_amount must not be negative");
        assert!(host_fee >= 0.0, "host_fee must not be negative");
        assert!(
            default_rebuy_amount >= 0.0,
            "default_rebuy_amount must not be negative"
        );

        let players: Vec<Player> = names
            .into_iter()
            .map(|name| Player::new(name, buy_in_amount))
            .collect();

        let host_id = players
            .iter()
            .find(|p| p.name() == host_name)
            .map(|p| p.id().to_string())
            .ok_or_else(|| GameError::UnknownPlayerName {
                name: host_name.to_string(),
            })?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            players,
            buy_in_amount,
            host_fee,
            default_rebuy_amount,
            host_id,
            co_host_id: None,
            rebuy_history: Vec::new(),
            settlement_transactions: Vec::new(),
            is_active: true,
        })
    }

    /// Name a co-host (builder pattern)
    pub fn with_co_host(mut self, name: &str) -> Result<Self, GameError> {
        let id = self
            .players
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.id().to_string())
            .ok_or_else(|| GameError::UnknownPlayerName {
                name: name.to_string(),
            })?;
        self.co_host_id = Some(id);
        Ok(self)
    }

    /// Get game ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get date label
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Get the roster
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get the configured buy-in
    pub fn buy_in_amount(&self) -> f64 {
        self.buy_in_amount
    }

    /// Get the per-player host fee
    pub fn host_fee(&self) -> f64 {
        self.host_fee
    }

    /// Get the default rebuy amount
    pub fn default_rebuy_amount(&self) -> f64 {
        self.default_rebuy_amount
    }

    /// Get the host's player id
    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    /// Get the co-host's player id, if any
    pub fn co_host_id(&self) -> Option<&str> {
        self.co_host_id.as_deref()
    }

    /// Get the rebuy history
    pub fn rebuy_history(&self) -> &[RebuyEntry] {
        &self.rebuy_history
    }

    /// Get the settlement persisted at finalization (empty while active)
    pub fn settlement_transactions(&self) -> &[SettlementTransaction] {
        &self.settlement_transactions
    }

    /// Whether the game is still running
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// The fee accounting this game uses
    pub fn fee_policy(&self) -> FeePolicy {
        FeePolicy::new(self.host_fee)
    }

    /// Record a rebuy for a player and append it to the history
    pub fn record_rebuy(
        &mut self,
        player_id: &str,
        amount: f64,
        timestamp: String,
    ) -> Result<&RebuyEntry, GameError> {
        if !self.is_active {
            return Err(GameError::AlreadyFinished);
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == player_id)
            .ok_or_else(|| GameError::UnknownPlayer {
                id: player_id.to_string(),
            })?;

        player.record_rebuy(amount)?;
        let player_name = player.name().to_string();

        self.rebuy_history.push(RebuyEntry {
            id: uuid::Uuid::new_v4().to_string(),
            player_id: player_id.to_string(),
            player_name,
            amount,
            timestamp,
        });

        Ok(self.rebuy_history.last().expect("entry just pushed"))
    }

    /// Record a rebuy of the game's default amount
    pub fn record_default_rebuy(
        &mut self,
        player_id: &str,
        timestamp: String,
    ) -> Result<&RebuyEntry, GameError> {
        self.record_rebuy(player_id, self.default_rebuy_amount, timestamp)
    }

    /// Record what a player walked away with
    pub fn record_cash_out(&mut self, player_id: &str, amount: f64) -> Result<(), GameError> {
        if !self.is_active {
            return Err(GameError::AlreadyFinished);
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == player_id)
            .ok_or_else(|| GameError::UnknownPlayer {
                id: player_id.to_string(),
            })?;

        player.set_cash_out(amount)?;
        Ok(())
    }

    /// Money on the table: every buy-in plus every rebuy
    pub fn total_pot(&self) -> f64 {
        self.players
            .iter()
            .map(|p| p.buy_in() + p.rebuys())
            .sum()
    }

    /// Fees the host collects across the whole table
    pub fn total_fees(&self) -> f64 {
        self.fee_policy().total_fees(self.players.len())
    }

    /// Pot plus fees: everything the table handed over
    pub fn total_collected(&self) -> f64 {
        self.total_pot() + self.total_fees()
    }

    /// Sum of recorded cash-outs
    pub fn total_cash_out(&self) -> f64 {
        self.players.iter().map(|p| p.cash_out()).sum()
    }

    /// Whether recorded cash-outs account for the whole pot
    ///
    /// Settlement of an unbalanced table produces misleading output, so
    /// callers surface this check before offering settlement.
    pub fn is_cash_out_balanced(&self) -> bool {
        (self.total_cash_out() - self.total_pot()).abs() < TOLERANCE
    }

    /// Net profit/loss for one player of this game
    pub fn net_result(&self, player: &Player) -> f64 {
        self.fee_policy()
            .net_result(player, player.id() == self.host_id, self.players.len())
    }

    /// Net positions for the whole roster
    pub fn net_positions(&self) -> Vec<NetPosition> {
        net_positions(&self.players, &self.host_id, &self.fee_policy())
    }

    /// Roster sorted by net result, best first
    pub fn standings(&self) -> Vec<(&Player, f64)> {
        let mut rows: Vec<(&Player, f64)> = self
            .players
            .iter()
            .map(|p| (p, self.net_result(p)))
            .collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1));
        rows
    }

    /// The player with the best net result, if anyone is seated
    pub fn biggest_winner(&self) -> Option<(&Player, f64)> {
        self.standings().into_iter().next()
    }

    /// Compute the settlement for the current state
    ///
    /// Recomputed from scratch on every call; never cached, because player
    /// data and the side-payment ledger change between calls.
    pub fn settlement(
        &self,
        side_payments: &[SidePayment],
        mode: SettlementMode,
    ) -> Vec<SettlementTransaction> {
        compute_settlement(
            &self.players,
            &self.host_id,
            &self.fee_policy(),
            side_payments,
            mode,
        )
    }

    /// Finish the game: compute the minimal settlement, persist it on the
    /// record, and mark the game inactive
    ///
    /// Refuses to run while cash-outs do not account for the pot, since the
    /// engine assumes a balanced table.
    pub fn finalize(
        &mut self,
        side_payments: &[SidePayment],
    ) -> Result<&[SettlementTransaction], GameError> {
        if !self.is_active {
            return Err(GameError::AlreadyFinished);
        }
        if !self.is_cash_out_balanced() {
            return Err(GameError::CashOutImbalance {
                pot: self.total_pot(),
                cash_out: self.total_cash_out(),
            });
        }

        self.settlement_transactions = self.settlement(side_payments, SettlementMode::Minimal);
        self.is_active = false;
        Ok(&self.settlement_transactions)
    }
}
