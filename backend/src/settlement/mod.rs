//! Settlement Module
//!
//! The debt-settlement engine: takes a roster of player positions (plus
//! side payments already made during play) and produces the pairwise
//! transactions that settle all balances.
//!
//! Two output shapes:
//! - **Minimal** (`greedy`): fewest transactions, greedy largest-vs-largest
//!   matching
//! - **Full** (`pairwise`): one transaction per (debtor, creditor) pair,
//!   proportional shares
//!
//! # Critical Invariants
//!
//! 1. **Purity**: every function is a pure computation over its inputs;
//!    all intermediate buffers are allocated fresh per call
//! 2. **Netting first**: side payments adjust net results before
//!    creditor/debtor classification in both modes
//! 3. **Tolerance band**: balances within ±0.01 count as settled and no
//!    emitted transaction is ≤ 0.01
//!
//! # Example
//!
//! ```rust
//! use poker_ledger_core_rs::{compute_settlement, FeePolicy, Player, SettlementMode};
//!
//! let mut alice = Player::new("Alice".to_string(), 100.0);
//! alice.set_cash_out(80.0).unwrap();
//! let mut bob = Player::new("Bob".to_string(), 100.0);
//! bob.record_rebuy(50.0).unwrap();
//! bob.set_cash_out(170.0).unwrap();
//!
//! let host_id = alice.id().to_string();
//! let players = vec![alice, bob];
//! let transactions = compute_settlement(
//!     &players,
//!     &host_id,
//!     &FeePolicy::default(),
//!     &[],
//!     SettlementMode::Minimal,
//! );
//!
//! assert_eq!(transactions.len(), 1);
//! assert_eq!(transactions[0].amount, 20.0);
//! ```

pub mod greedy;
pub mod net;
pub mod pairwise;

// Re-export public API
pub use greedy::settle_minimal;
pub use net::{apply_side_payments, net_positions, NetPosition};
pub use pairwise::settle_pairwise;

use serde::{Deserialize, Serialize};

use crate::models::player::Player;
use crate::models::transaction::{SettlementTransaction, SidePayment};
use crate::policy::FeePolicy;

/// Balances within this band of zero count as settled
///
/// Guards every float comparison so floating-point drift never produces
/// spurious cent-level transactions.
pub const TOLERANCE: f64 = 0.01;

/// Which transaction set to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementMode {
    /// Fewest transactions (greedy matching)
    #[default]
    Minimal,

    /// Every debtor pays every creditor proportionally
    Full,
}

/// Compute the settlement for a roster in one call
///
/// Nets the side payments into fresh net results, then runs the selected
/// algorithm. Nothing is cached: player data changes between calls (a new
/// side payment, a corrected cash-out), so every invocation recomputes
/// from scratch.
///
/// Fewer than 2 players means nobody to settle with; returns an empty list.
pub fn compute_settlement(
    players: &[Player],
    host_id: &str,
    policy: &FeePolicy,
    side_payments: &[SidePayment],
    mode: SettlementMode,
) -> Vec<SettlementTransaction> {
    if players.len() < 2 {
        return Vec::new();
    }

    let mut positions = net_positions(players, host_id, policy);
    apply_side_payments(&mut positions, side_payments);

    match mode {
        SettlementMode::Minimal => settle_minimal(&positions),
        SettlementMode::Full => settle_pairwise(&positions),
    }
}

/// Total absolute balance left outside the tolerance band after applying
/// `transactions` to `positions`
///
/// 0.0 means the transaction set fully settles the table. A positive value
/// means credits and debts did not balance (inconsistent side payments or
/// an unbalanced cash-out) and that much money has no matching
/// counterparty; callers showing totals should surface a warning.
pub fn settlement_residual(
    positions: &[NetPosition],
    transactions: &[SettlementTransaction],
) -> f64 {
    let mut nets: Vec<(&str, f64)> = positions
        .iter()
        .map(|p| (p.player.id(), p.net))
        .collect();

    for tx in transactions {
        for (id, net) in nets.iter_mut() {
            if *id == tx.from.id() {
                *net += tx.amount;
            } else if *id == tx.to.id() {
                *net -= tx.amount;
            }
        }
    }

    nets.iter()
        .map(|(_, net)| net.abs())
        .filter(|residual| *residual > TOLERANCE)
        .sum()
}
