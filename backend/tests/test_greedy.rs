//! Tests for the minimal (greedy) settlement algorithm
//!
//! Largest creditor against most-negative debtor until one side runs out.

use poker_ledger_core_rs::{
    compute_settlement, net_positions, settle_minimal, settlement_residual, FeePolicy, Player,
    SettlementMode, TOLERANCE,
};

fn player(name: &str, buy_in: f64, rebuys: f64, cash_out: f64) -> Player {
    let mut p = Player::new(name.to_string(), buy_in);
    if rebuys > 0.0 {
        p.record_rebuy(rebuys).unwrap();
    }
    p.set_cash_out(cash_out).unwrap();
    p
}

#[test]
fn test_two_player_game_needs_one_transaction() {
    let players = vec![
        player("Alice", 100.0, 0.0, 80.0),
        player("Bob", 100.0, 50.0, 170.0),
    ];
    let host_id = players[0].id().to_string();

    let positions = net_positions(&players, &host_id, &FeePolicy::default());
    let transactions = settle_minimal(&positions);

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].from.name(), "Alice");
    assert_eq!(transactions[0].to.name(), "Bob");
    assert_eq!(transactions[0].amount, 20.0);

    assert_eq!(settlement_residual(&positions, &transactions), 0.0);
}

#[test]
fn test_single_winner_collects_from_both_losers() {
    // Alice +45, Bob -30, Charlie -15
    let players = vec![
        player("Alice", 75.0, 0.0, 120.0),
        player("Bob", 75.0, 0.0, 45.0),
        player("Charlie", 75.0, 0.0, 60.0),
    ];
    let host_id = players[0].id().to_string();

    let positions = net_positions(&players, &host_id, &FeePolicy::default());
    let transactions = settle_minimal(&positions);

    // Most-negative debtor is matched first
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].from.name(), "Bob");
    assert_eq!(transactions[0].to.name(), "Alice");
    assert_eq!(transactions[0].amount, 30.0);
    assert_eq!(transactions[1].from.name(), "Charlie");
    assert_eq!(transactions[1].to.name(), "Alice");
    assert_eq!(transactions[1].amount, 15.0);

    assert_eq!(settlement_residual(&positions, &transactions), 0.0);
}

#[test]
fn test_unbalanced_input_leaves_residual_silently() {
    // Alice +45, Bob -30, Charlie -40: the table is short 25 (a cash-out
    // was mis-recorded). The greedy walk still terminates cleanly.
    let players = vec![
        player("Alice", 50.0, 25.0, 120.0),
        player("Bob", 50.0, 0.0, 20.0),
        player("Charlie", 50.0, 25.0, 35.0),
    ];
    let host_id = players[0].id().to_string();

    let positions = net_positions(&players, &host_id, &FeePolicy::default());
    let transactions = settle_minimal(&positions);

    // Charlie (most negative) first: min(45, 40); then Bob: min(5, 30)
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].from.name(), "Charlie");
    assert_eq!(transactions[0].amount, 40.0);
    assert_eq!(transactions[1].from.name(), "Bob");
    assert_eq!(transactions[1].amount, 5.0);

    // Bob's remaining 25 has no creditor left; the caller-side check sees it
    let residual = settlement_residual(&positions, &transactions);
    assert!((residual - 25.0).abs() < 1e-9);
}

#[test]
fn test_equal_debtors_keep_roster_order() {
    // Alice +40, Bob -20, Charlie -20
    let players = vec![
        player("Alice", 60.0, 0.0, 100.0),
        player("Bob", 60.0, 0.0, 40.0),
        player("Charlie", 60.0, 0.0, 40.0),
    ];
    let host_id = players[0].id().to_string();

    let positions = net_positions(&players, &host_id, &FeePolicy::default());
    let transactions = settle_minimal(&positions);

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].from.name(), "Bob");
    assert_eq!(transactions[1].from.name(), "Charlie");
}

#[test]
fn test_settled_table_needs_nothing() {
    let players = vec![
        player("Alice", 100.0, 0.0, 100.0),
        player("Bob", 100.0, 0.0, 100.0),
    ];
    let host_id = players[0].id().to_string();

    let positions = net_positions(&players, &host_id, &FeePolicy::default());
    assert!(settle_minimal(&positions).is_empty());
}

#[test]
fn test_drift_inside_the_tolerance_band_is_ignored() {
    let players = vec![
        player("Alice", 100.0, 0.0, 100.005),
        player("Bob", 100.0, 0.0, 99.995),
    ];
    let host_id = players[0].id().to_string();

    let positions = net_positions(&players, &host_id, &FeePolicy::default());
    assert!(settle_minimal(&positions).is_empty());
}

#[test]
fn test_fewer_than_two_players_settles_to_nothing() {
    let solo = vec![player("Alice", 100.0, 0.0, 100.0)];
    let host_id = solo[0].id().to_string();

    assert!(compute_settlement(
        &solo,
        &host_id,
        &FeePolicy::default(),
        &[],
        SettlementMode::Minimal
    )
    .is_empty());

    assert!(
        compute_settlement(&[], "", &FeePolicy::default(), &[], SettlementMode::Minimal)
            .is_empty()
    );
}

#[test]
fn test_transaction_count_bound_on_a_full_table() {
    // 2 creditors, 3 debtors: at most 4 transactions
    let players = vec![
        player("Alice", 100.0, 0.0, 160.0),
        player("Bob", 100.0, 0.0, 130.0),
        player("Charlie", 100.0, 0.0, 70.0),
        player("Dana", 100.0, 0.0, 80.0),
        player("Eve", 100.0, 0.0, 60.0),
    ];
    let host_id = players[0].id().to_string();

    let positions = net_positions(&players, &host_id, &FeePolicy::default());
    let transactions = settle_minimal(&positions);

    assert!(transactions.len() <= 4);
    assert_eq!(settlement_residual(&positions, &transactions), 0.0);
    for tx in &transactions {
        assert!(tx.amount > TOLERANCE);
    }
}
