use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::tree::Tree;

pub type Amount = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoinId(pub [u8; 32]);

impl From<[u8; 32]> for CoinId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl CoinId {
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut id = [0u8; 32];
        rng.fill_bytes(&mut id);
        Self(id)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PuzzleHash(pub [u8; 32]);

impl From<[u8; 32]> for PuzzleHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl PuzzleHash {
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut ph = [0u8; 32];
        rng.fill_bytes(&mut ph);
        Self(ph)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// A coin is its parent's id, the hash of the puzzle locking it and the amount
/// it holds. Two coins with identical fields are the same coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub parent_id: CoinId,
    pub puzzle_hash: PuzzleHash,
    pub amount: Amount,
}

impl Coin {
    pub fn new(parent_id: CoinId, puzzle_hash: PuzzleHash, amount: Amount) -> Self {
        Self {
            parent_id,
            puzzle_hash,
            amount,
        }
    }

    // The environment's coin id. The amount is committed in fixed-width
    // big-endian form, matching the environment's wire encoding bit-for-bit.
    pub fn id(&self) -> CoinId {
        let mut hasher = Sha256::new();
        hasher.update(self.parent_id.as_bytes());
        hasher.update(self.puzzle_hash.as_bytes());
        hasher.update(self.amount.to_be_bytes());
        let id: [u8; 32] = hasher.finalize().into();

        CoinId(id)
    }

    // The coin as the environment's `(parent_id puzzle_hash amount)` value,
    // used wherever a coin is committed inside a tree hash.
    pub fn to_tree(&self) -> Tree {
        Tree::list([
            Tree::atom(self.parent_id.as_bytes()),
            Tree::atom(self.puzzle_hash.as_bytes()),
            Tree::int(self.amount as i128),
        ])
    }
}
