//! Tests for roster dedup and career aggregation

use poker_ledger_core_rs::{
    career_stats, dedupe_players, name_key, past_player_pool, Game, Player,
};

fn finished_game(date: &str, seats: &[(&str, f64, f64)], buy_in: f64) -> Game {
    let names: Vec<String> = seats.iter().map(|(n, _, _)| n.to_string()).collect();
    let mut game = Game::new(
        date.to_string(),
        names,
        seats[0].0,
        buy_in,
        0.0,
        buy_in,
    )
    .unwrap();

    let ids: Vec<String> = game.players().iter().map(|p| p.id().to_string()).collect();
    for (i, (_, rebuys, cash_out)) in seats.iter().enumerate() {
        if *rebuys > 0.0 {
            game.record_rebuy(&ids[i], *rebuys, "20:00".to_string()).unwrap();
        }
        game.record_cash_out(&ids[i], *cash_out).unwrap();
    }
    game
}

#[test]
fn test_name_key_normalizes() {
    assert_eq!(name_key("Alice"), "alice");
    assert_eq!(name_key("  ALICE "), "alice");
    assert_ne!(name_key("Alice"), name_key("Alicia"));
}

#[test]
fn test_dedupe_keeps_first_occurrence() {
    let players = vec![
        Player::new("Alice".to_string(), 50.0),
        Player::new("  alice ".to_string(), 100.0),
        Player::new("Bob".to_string(), 50.0),
    ];

    let unique = dedupe_players(&players, |p| name_key(p.name()));
    assert_eq!(unique.len(), 2);
    assert_eq!(unique[0].name(), "Alice");
    assert_eq!(unique[0].buy_in(), 50.0);
    assert_eq!(unique[1].name(), "Bob");
}

#[test]
fn test_past_player_pool_spans_games() {
    let games = vec![
        finished_game(
            "2024-01-15",
            &[("Alice", 0.0, 60.0), ("Bob", 0.0, 40.0)],
            50.0,
        ),
        finished_game(
            "2024-01-22",
            &[("alice", 0.0, 50.0), ("Charlie", 0.0, 50.0)],
            50.0,
        ),
    ];

    let pool = past_player_pool(&games);
    let names: Vec<&str> = pool.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
}

#[test]
fn test_career_stats_aggregate_across_games() {
    let games = vec![
        // Alice +45, Bob -45
        finished_game(
            "2024-01-15",
            &[("Alice", 25.0, 120.0), ("Bob", 0.0, 5.0)],
            50.0,
        ),
        // alice -20, Bob +20
        finished_game(
            "2024-01-22",
            &[("alice", 0.0, 80.0), ("Bob", 0.0, 120.0)],
            100.0,
        ),
    ];

    let stats = career_stats(&games);
    assert_eq!(stats.len(), 2);

    // Alice: 45 - 20 = +25 lifetime, ahead of Bob at -45 + 20 = -25
    assert_eq!(stats[0].name, "Alice");
    assert_eq!(stats[0].games_played, 2);
    assert_eq!(stats[0].total_invested, 175.0);
    assert_eq!(stats[0].total_winnings, 25.0);

    assert_eq!(stats[1].name, "Bob");
    assert_eq!(stats[1].games_played, 2);
    assert_eq!(stats[1].total_invested, 150.0);
    assert_eq!(stats[1].total_winnings, -25.0);
}

#[test]
fn test_career_stats_ignore_host_fee_income() {
    // Same table, but with a host fee configured; career winnings stay raw
    let mut game = Game::new(
        "2024-01-15".to_string(),
        vec!["Alice".to_string(), "Bob".to_string()],
        "Alice",
        100.0,
        5.0,
        50.0,
    )
    .unwrap();
    let ids: Vec<String> = game.players().iter().map(|p| p.id().to_string()).collect();
    game.record_cash_out(&ids[0], 80.0).unwrap();
    game.record_cash_out(&ids[1], 120.0).unwrap();

    let stats = career_stats(&[game]);
    assert_eq!(stats[0].name, "Bob");
    assert_eq!(stats[0].total_winnings, 20.0);
    assert_eq!(stats[1].name, "Alice");
    assert_eq!(stats[1].total_winnings, -20.0);
}
