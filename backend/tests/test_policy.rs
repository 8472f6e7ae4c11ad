//! Tests for the fee accounting policy
//!
//! One canonical formula for invested totals and net results; every
//! variant the screens used to hand-roll is a policy flag here.

use poker_ledger_core_rs::{FeePolicy, Player};

fn player(buy_in: f64, rebuys: f64, cash_out: f64) -> Player {
    let mut p = Player::new("Test".to_string(), buy_in);
    if rebuys > 0.0 {
        p.record_rebuy(rebuys).unwrap();
    }
    p.set_cash_out(cash_out).unwrap();
    p
}

#[test]
fn test_invested_is_buy_in_plus_rebuys() {
    let policy = FeePolicy::default();
    assert_eq!(policy.invested(&player(50.0, 25.0, 0.0)), 75.0);
    assert_eq!(policy.invested(&player(100.0, 0.0, 0.0)), 100.0);
}

#[test]
fn test_invested_can_include_host_fee() {
    let policy = FeePolicy::new(5.0).with_fee_in_investment();
    assert_eq!(policy.invested(&player(50.0, 25.0, 0.0)), 80.0);
}

#[test]
fn test_net_result_for_regular_player() {
    let policy = FeePolicy::new(5.0);

    // Fee income never reaches a non-host
    let net = policy.net_result(&player(50.0, 25.0, 120.0), false, 3);
    assert_eq!(net, 45.0);
}

#[test]
fn test_host_receives_fee_per_seat() {
    let policy = FeePolicy::new(5.0);

    // 3 seats at 5.0 each = 15.0 of fee income
    let net = policy.net_result(&player(50.0, 25.0, 120.0), true, 3);
    assert_eq!(net, 60.0);
}

#[test]
fn test_zero_fee_policy_is_neutral() {
    let policy = FeePolicy::default();
    let p = player(100.0, 0.0, 100.0);
    assert_eq!(policy.net_result(&p, true, 8), 0.0);
    assert_eq!(policy.net_result(&p, false, 8), 0.0);
}

#[test]
fn test_non_finite_inputs_count_as_zero() {
    let policy = FeePolicy::default();

    let mut p = Player::new("Test".to_string(), 50.0);
    p.set_cash_out(f64::NAN).unwrap();

    // NaN cash-out is treated as "never cashed out", not propagated
    let net = policy.net_result(&p, false, 2);
    assert_eq!(net, -50.0);
}

#[test]
fn test_missing_fields_deserialize_to_zero() {
    // A partial record from storage: no rebuys, no cash-out
    let json = r#"{"id":"p1","name":"Alice","buy_in":50.0}"#;
    let p: Player = serde_json::from_str(json).unwrap();

    assert_eq!(p.rebuys(), 0.0);
    assert_eq!(p.cash_out(), 0.0);
    assert_eq!(FeePolicy::default().net_result(&p, false, 2), -50.0);
}
