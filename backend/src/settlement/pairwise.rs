//! Full pairwise settlement
//!
//! Alternate display mode: instead of minimizing transaction count, every
//! debtor pays every creditor their proportional share. Up to
//! `creditors × debtors` transactions, but the total moved equals what the
//! minimal algorithm moves.

use log::debug;

use crate::models::transaction::SettlementTransaction;
use crate::settlement::net::NetPosition;
use crate::settlement::TOLERANCE;

/// Produce a transaction for every (debtor, creditor) pair
///
/// Each debtor's debt is split across creditors in proportion to each
/// creditor's share of the total outstanding credit. Pieces at or below
/// the tolerance are dropped.
///
/// # Example
/// ```
/// use poker_ledger_core_rs::{net_positions, settle_pairwise, FeePolicy, Player};
///
/// let mut winner = Player::new("Alice".to_string(), 100.0);
/// winner.set_cash_out(200.0).unwrap();
/// let mut loser_a = Player::new("Bob".to_string(), 100.0);
/// loser_a.set_cash_out(50.0).unwrap();
/// let mut loser_b = Player::new("Carol".to_string(), 100.0);
/// loser_b.set_cash_out(50.0).unwrap();
///
/// let host_id = winner.id().to_string();
/// let players = vec![winner, loser_a, loser_b];
/// let positions = net_positions(&players, &host_id, &FeePolicy::default());
///
/// // Both losers pay the single winner their full 50
/// let transactions = settle_pairwise(&positions);
/// assert_eq!(transactions.len(), 2);
/// assert_eq!(transactions[0].amount, 50.0);
/// assert_eq!(transactions[1].amount, 50.0);
/// ```
pub fn settle_pairwise(positions: &[NetPosition]) -> Vec<SettlementTransaction> {
    let creditors: Vec<&NetPosition> = positions.iter().filter(|p| p.net > TOLERANCE).collect();
    let debtors: Vec<&NetPosition> = positions.iter().filter(|p| p.net < -TOLERANCE).collect();

    debug!(
        "pairwise settlement: {} creditors x {} debtors",
        creditors.len(),
        debtors.len()
    );

    let mut transactions = Vec::new();

    for debtor in &debtors {
        let debt = debtor.net.abs();
        let total_credit: f64 = creditors.iter().map(|c| c.net).sum();

        for creditor in &creditors {
            let amount = (creditor.net / total_credit) * debt;

            if amount > TOLERANCE {
                transactions.push(SettlementTransaction {
                    from: debtor.player.clone(),
                    to: creditor.player.clone(),
                    amount,
                });
            }
        }
    }

    transactions
}
