//! Minimal settlement via greedy matching
//!
//! Cash-flow minimization: repeatedly match the largest outstanding credit
//! against the largest outstanding debt. For a balanced table this emits at
//! most `creditors + debtors - 1` transactions.
//!
//! This is the classic greedy approximation, not the recursive optimal
//! subset-cancellation algorithm; for tables of 2-20 players the greedy
//! result is the documented behavior.

use log::debug;

use crate::models::transaction::SettlementTransaction;
use crate::settlement::net::NetPosition;
use crate::settlement::TOLERANCE;

/// Produce the minimal pairwise transaction set that settles all positions
///
/// # Algorithm
///
/// 1. Classify: net > 0.01 creditor, net < -0.01 debtor, otherwise settled
/// 2. Sort creditors descending, debtors ascending (most negative first)
/// 3. Walk both lists with cursors, always transferring
///    `min(remaining credit, remaining debt)` from the current debtor to
///    the current creditor, advancing whichever side drops to ≤ 0.01
///
/// If credits and debts do not balance (inconsistent input), the loop stops
/// when either side runs out and the residual is left unmatched; see
/// [`settlement_residual`](crate::settlement::settlement_residual) for the
/// caller-side cross-check.
///
/// # Example
/// ```
/// use poker_ledger_core_rs::{net_positions, settle_minimal, FeePolicy, Player};
///
/// let mut alice = Player::new("Alice".to_string(), 100.0);
/// alice.set_cash_out(80.0).unwrap();
/// let mut bob = Player::new("Bob".to_string(), 100.0);
/// bob.set_cash_out(120.0).unwrap();
///
/// let host_id = alice.id().to_string();
/// let players = vec![alice, bob];
/// let positions = net_positions(&players, &host_id, &FeePolicy::default());
/// let transactions = settle_minimal(&positions);
///
/// assert_eq!(transactions.len(), 1);
/// assert_eq!(transactions[0].from.name(), "Alice");
/// assert_eq!(transactions[0].to.name(), "Bob");
/// assert_eq!(transactions[0].amount, 20.0);
/// ```
pub fn settle_minimal(positions: &[NetPosition]) -> Vec<SettlementTransaction> {
    let mut creditors: Vec<&NetPosition> =
        positions.iter().filter(|p| p.net > TOLERANCE).collect();
    let mut debtors: Vec<&NetPosition> =
        positions.iter().filter(|p| p.net < -TOLERANCE).collect();

    // Stable sorts: ties keep roster order
    creditors.sort_by(|a, b| b.net.total_cmp(&a.net));
    debtors.sort_by(|a, b| a.net.total_cmp(&b.net));

    debug!(
        "minimal settlement: {} creditors, {} debtors, {} settled",
        creditors.len(),
        debtors.len(),
        positions.len() - creditors.len() - debtors.len()
    );

    let mut remaining_credit: Vec<f64> = creditors.iter().map(|p| p.net).collect();
    let mut remaining_debt: Vec<f64> = debtors.iter().map(|p| p.net.abs()).collect();

    let mut transactions = Vec::new();
    let mut creditor_index = 0;
    let mut debtor_index = 0;

    while creditor_index < creditors.len() && debtor_index < debtors.len() {
        let amount = remaining_credit[creditor_index].min(remaining_debt[debtor_index]);

        // Skip sub-tolerance dust from floating-point drift
        if amount > TOLERANCE {
            transactions.push(SettlementTransaction {
                from: debtors[debtor_index].player.clone(),
                to: creditors[creditor_index].player.clone(),
                amount,
            });
        }

        remaining_credit[creditor_index] -= amount;
        remaining_debt[debtor_index] -= amount;

        if remaining_credit[creditor_index] <= TOLERANCE {
            creditor_index += 1;
        }
        if remaining_debt[debtor_index] <= TOLERANCE {
            debtor_index += 1;
        }
    }

    transactions
}
