//! Domain models
//!
//! - `player`: one participant's stake in a game
//! - `game`: the full record of a poker night
//! - `transaction`: settlement instructions and recorded side payments

pub mod game;
pub mod player;
pub mod transaction;

pub use game::{Game, GameError, RebuyEntry};
pub use player::{Player, PlayerError};
pub use transaction::{SettlementTransaction, SidePayment};
