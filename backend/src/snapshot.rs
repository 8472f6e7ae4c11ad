//! Snapshot - save/load a game record
//!
//! Serializes a game together with its side-payment ledger for the caller's
//! storage (local file, remote database, whatever), and verifies a SHA-256
//! digest on the way back in so silently corrupted or hand-edited records
//! are caught before they feed the ledger.
//!
//! # Critical Invariants
//!
//! - **Round trip**: `load_game(save_game(g, p)?)` reproduces `g` and `p`
//!   exactly
//! - **Tamper evidence**: any change to the stored payload fails the
//!   digest check

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::game::Game;
use crate::models::transaction::SidePayment;

/// Errors that can occur when saving or loading a snapshot
#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Snapshot digest mismatch: expected {expected}, computed {computed}")]
    DigestMismatch { expected: String, computed: String },
}

/// A game record plus its mid-game side-payment ledger, ready for storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The game record
    pub game: Game,

    /// Side payments recorded while the game ran
    pub side_payments: Vec<SidePayment>,

    /// SHA-256 over the serialized game and ledger
    pub digest: String,
}

/// Serialize a game and its ledger to a JSON snapshot string
///
/// # Example
/// ```
/// use poker_ledger_core_rs::{load_game, save_game, Game};
///
/// let game = Game::new(
///     "2024-01-15".to_string(),
///     vec!["Alice".to_string(), "Bob".to_string()],
///     "Alice",
///     50.0,
///     5.0,
///     50.0,
/// )
/// .unwrap();
///
/// let json = save_game(&game, &[]).unwrap();
/// let (restored, ledger) = load_game(&json).unwrap();
/// assert_eq!(restored, game);
/// assert!(ledger.is_empty());
/// ```
pub fn save_game(game: &Game, side_payments: &[SidePayment]) -> Result<String, SnapshotError> {
    let snapshot = GameSnapshot {
        game: game.clone(),
        side_payments: side_payments.to_vec(),
        digest: compute_digest(game, side_payments)?,
    };

    serde_json::to_string(&snapshot).map_err(|e| SnapshotError::Serialization(e.to_string()))
}

/// Restore a game and its ledger from a snapshot string, verifying the
/// digest
pub fn load_game(json: &str) -> Result<(Game, Vec<SidePayment>), SnapshotError> {
    let snapshot: GameSnapshot =
        serde_json::from_str(json).map_err(|e| SnapshotError::Serialization(e.to_string()))?;

    let computed = compute_digest(&snapshot.game, &snapshot.side_payments)?;
    if computed != snapshot.digest {
        return Err(SnapshotError::DigestMismatch {
            expected: snapshot.digest,
            computed,
        });
    }

    Ok((snapshot.game, snapshot.side_payments))
}

/// SHA-256 over the canonical JSON of the payload
///
/// Field order of the derived `Serialize` impls is fixed, so plain
/// `serde_json::to_string` is already canonical here.
fn compute_digest(game: &Game, side_payments: &[SidePayment]) -> Result<String, SnapshotError> {
    let payload = serde_json::to_string(&(game, side_payments))
        .map_err(|e| SnapshotError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
