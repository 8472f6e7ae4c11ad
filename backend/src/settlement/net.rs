//! Net positions and side-payment netting
//!
//! Turns a roster into signed net results and folds already-made side
//! payments into them before the matching algorithms run.
//!
//! # Critical Invariants
//!
//! 1. Netting happens BEFORE creditor/debtor classification
//! 2. Netting is pure: same positions + same payments always produce the
//!    same adjusted positions (no incremental state)

use serde::{Deserialize, Serialize};

use crate::models::player::Player;
use crate::models::transaction::SidePayment;
use crate::policy::FeePolicy;

/// A player together with their signed net result for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetPosition {
    /// The player this position belongs to
    pub player: Player,

    /// Net profit (positive) or loss (negative)
    pub net: f64,
}

/// Compute every player's net position
///
/// The player whose id matches `host_id` receives the collected fees as
/// income, per the policy.
///
/// # Example
/// ```
/// use poker_ledger_core_rs::{net_positions, FeePolicy, Player};
///
/// let mut alice = Player::new("Alice".to_string(), 100.0);
/// alice.set_cash_out(80.0).unwrap();
/// let mut bob = Player::new("Bob".to_string(), 100.0);
/// bob.set_cash_out(120.0).unwrap();
///
/// let host_id = alice.id().to_string();
/// let positions = net_positions(&[alice, bob], &host_id, &FeePolicy::default());
/// assert_eq!(positions[0].net, -20.0);
/// assert_eq!(positions[1].net, 20.0);
/// ```
pub fn net_positions(players: &[Player], host_id: &str, policy: &FeePolicy) -> Vec<NetPosition> {
    let count = players.len();
    players
        .iter()
        .map(|player| NetPosition {
            net: policy.net_result(player, player.id() == host_id, count),
            player: player.clone(),
        })
        .collect()
}

/// Fold side payments into the net positions
///
/// A payment of `amount` from X to Y means X already paid, so X owes less
/// (net += amount), and Y already received, so Y is owed less
/// (net -= amount). Multiple payments between the same pair accumulate.
///
/// Payments naming a player who is not in `positions` are skipped; the
/// roster is the authority on who played.
pub fn apply_side_payments(positions: &mut [NetPosition], payments: &[SidePayment]) {
    for payment in payments {
        for position in positions.iter_mut() {
            if position.player.id() == payment.from.id() {
                position.net += payment.amount;
            } else if position.player.id() == payment.to.id() {
                position.net -= payment.amount;
            }
        }
    }
}
