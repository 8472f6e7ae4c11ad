//! Poker Ledger Core - Settlement Engine
//!
//! Tracks the money side of informal poker nights: buy-ins, rebuys,
//! cash-outs, host fees, and who owes whom at the end.
//!
//! # Architecture
//!
//! - **models**: Domain types (Player, Game, SettlementTransaction, SidePayment)
//! - **policy**: Host-fee accounting, the single source of invested/net arithmetic
//! - **settlement**: Net positions, side-payment netting, minimal (greedy)
//!   and full (pairwise) settlement
//! - **roster**: Cross-game player identity and career aggregation
//! - **report**: Shareable plain-text game recap
//! - **snapshot**: Serializable game record with integrity digest
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 currency units; every zero comparison uses
//!    the 0.01 tolerance band
//! 2. The settlement engine is pure: no I/O, no shared state, fresh
//!    allocations per call
//! 3. Side payments are netted into positions before creditor/debtor
//!    classification

// Module declarations
pub mod models;
pub mod policy;
pub mod report;
pub mod roster;
pub mod settlement;
pub mod snapshot;

// Re-exports for convenience
pub use models::{
    game::{Game, GameError, RebuyEntry},
    player::{Player, PlayerError},
    transaction::{SettlementTransaction, SidePayment},
};
pub use policy::FeePolicy;
pub use report::settlement_summary;
pub use roster::{career_stats, dedupe_players, name_key, past_player_pool, CareerStats};
pub use settlement::{
    apply_side_payments, compute_settlement, net_positions, settle_minimal, settle_pairwise,
    settlement_residual, NetPosition, SettlementMode, TOLERANCE,
};
pub use snapshot::{load_game, save_game, GameSnapshot, SnapshotError};
