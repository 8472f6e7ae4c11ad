//! Shareable results summary
//!
//! Builds the plain-text recap the host sends to the table chat after the
//! game: totals, per-player results, and who pays whom. String building
//! only; delivery is the caller's problem.

use crate::models::game::Game;
use crate::models::transaction::SettlementTransaction;

/// Format the full results text for a game and its chosen settlement
///
/// # Example
/// ```
/// use poker_ledger_core_rs::{settlement_summary, Game, SettlementMode};
///
/// let mut game = Game::new(
///     "2024-01-08".to_string(),
///     vec!["Alice".to_string(), "Bob".to_string()],
///     "Alice",
///     100.0,
///     0.0,
///     50.0,
/// )
/// .unwrap();
/// let ids: Vec<String> = game.players().iter().map(|p| p.id().to_string()).collect();
/// game.record_cash_out(&ids[0], 80.0).unwrap();
/// game.record_cash_out(&ids[1], 120.0).unwrap();
///
/// let transactions = game.settlement(&[], SettlementMode::Minimal);
/// let text = settlement_summary(&game, &transactions);
/// assert!(text.contains("Bob: +$20.00"));
/// assert!(text.contains("Alice pays Bob $20.00"));
/// ```
pub fn settlement_summary(game: &Game, transactions: &[SettlementTransaction]) -> String {
    let mut text = String::from("Poker Game Results\n\n");

    text.push_str(&format!("Total Amount: ${:.2}\n", game.total_collected()));
    text.push_str(&format!("Game Pot: ${:.2}\n", game.total_pot()));
    text.push_str(&format!("Host Fees: ${:.2}\n", game.total_fees()));
    text.push_str(&format!("Players: {}\n\n", game.players().len()));

    text.push_str("Results:\n");
    for (player, net) in game.standings() {
        text.push_str(&format!("{}: {}\n", player.name(), signed_dollars(net)));
    }

    text.push_str("\nSettlements:\n");
    for tx in transactions {
        text.push_str(&format!(
            "{} pays {} ${:.2}\n",
            tx.from.name(),
            tx.to.name(),
            tx.amount
        ));
    }

    text
}

fn signed_dollars(value: f64) -> String {
    if value >= 0.0 {
        format!("+${:.2}", value)
    } else {
        format!("-${:.2}", value.abs())
    }
}
