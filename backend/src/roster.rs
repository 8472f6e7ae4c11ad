//! Roster utilities
//!
//! Player identity across games is name-based: there are no accounts, so
//! "the same player" means "the same name, ignoring case and stray
//! whitespace". These helpers make that keying explicit instead of leaving
//! each caller to fuzzy-match on its own.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::game::Game;
use crate::models::player::Player;
use crate::policy::FeePolicy;

/// Canonical identity key for a player name: trimmed and lowercased
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Keep the first player per key, dropping later duplicates
///
/// # Example
/// ```
/// use poker_ledger_core_rs::{dedupe_players, name_key, Player};
///
/// let players = vec![
///     Player::new("Alice".to_string(), 50.0),
///     Player::new("  alice ".to_string(), 100.0),
///     Player::new("Bob".to_string(), 50.0),
/// ];
/// let unique = dedupe_players(&players, |p| name_key(p.name()));
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].name(), "Alice");
/// ```
pub fn dedupe_players<F>(players: &[Player], mut key: F) -> Vec<Player>
where
    F: FnMut(&Player) -> String,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for player in players {
        if seen.insert(key(player)) {
            unique.push(player.clone());
        }
    }
    unique
}

/// Everyone who has ever sat down, one entry per name key, in
/// first-seen order across the given games
pub fn past_player_pool(games: &[Game]) -> Vec<Player> {
    let all: Vec<Player> = games
        .iter()
        .flat_map(|g| g.players().iter().cloned())
        .collect();
    dedupe_players(&all, |p| name_key(p.name()))
}

/// Lifetime aggregate for one player identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerStats {
    /// Display name from the first appearance
    pub name: String,

    /// Number of games this identity appeared in
    pub games_played: usize,

    /// Total buy-ins plus rebuys across all games
    pub total_invested: f64,

    /// Total cash-outs minus investments across all games
    pub total_winnings: f64,
}

/// Aggregate every player's record across games, best lifetime winnings
/// first
///
/// Winnings here are raw table results (no host-fee income), which is how
/// the stats page has always counted them.
pub fn career_stats(games: &[Game]) -> Vec<CareerStats> {
    let policy = FeePolicy::default();
    let mut by_key: HashMap<String, CareerStats> = HashMap::new();

    for game in games {
        for player in game.players() {
            let invested = policy.invested(player);
            let winnings = policy.net_result(player, false, game.players().len());

            let entry = by_key
                .entry(name_key(player.name()))
                .or_insert_with(|| CareerStats {
                    name: player.name().to_string(),
                    games_played: 0,
                    total_invested: 0.0,
                    total_winnings: 0.0,
                });
            entry.games_played += 1;
            entry.total_invested += invested;
            entry.total_winnings += winnings;
        }
    }

    let mut stats: Vec<CareerStats> = by_key.into_values().collect();
    stats.sort_by(|a, b| {
        b.total_winnings
            .total_cmp(&a.total_winnings)
            .then_with(|| a.name.cmp(&b.name))
    });
    stats
}
